//! Per-line cleanup applied before header matching.
//!
//! Exports sprinkle invisible characters around the timestamp: iOS and newer
//! Android builds put a narrow no-break space before `am`/`pm`, and RTL locales
//! wrap names and the ` - ` delimiter in directional marks. None of these carry
//! meaning for the record, so they are normalised on every physical line.

use std::borrow::Cow;

/// Returns `true` for Unicode bidirectional formatting characters.
///
/// Covers LRM/RLM, the Arabic letter mark, the embedding/override controls
/// (U+202A..U+202E) and the isolates (U+2066..U+2069).
pub fn is_directional_mark(c: char) -> bool {
    matches!(
        c,
        '\u{200E}' | '\u{200F}' | '\u{061C}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}'
    )
}

/// Space variants exports use inside timestamps.
fn is_odd_space(c: char) -> bool {
    matches!(c, '\u{00A0}' | '\u{2007}' | '\u{2009}' | '\u{202F}')
}

/// Drops directional marks and folds no-break/thin spaces into ASCII spaces.
///
/// Borrows when the line is already clean, which is the common case.
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if !line.chars().any(|c| is_directional_mark(c) || is_odd_space(c)) {
        return Cow::Borrowed(line);
    }

    let cleaned = line
        .chars()
        .filter(|&c| !is_directional_mark(c))
        .map(|c| if is_odd_space(c) { ' ' } else { c })
        .collect();
    Cow::Owned(cleaned)
}

/// Strips leading and trailing whitespace, including a stray `\r` from CRLF exports.
pub fn clean_edges(text: &str) -> &str {
    text.trim()
}
