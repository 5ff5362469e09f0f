//! Emoji detection and counting.
//!
//! Text is split into extended grapheme clusters so that ZWJ sequences,
//! flags, keycaps and skin-tone variants each count as one emoji. Every
//! cluster is looked up in the Unicode emoji table; the canonical
//! (fully-qualified) form is used as the table key, so `❤` and `❤️` are
//! counted together.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::{SenderFilter, select};
use crate::analysis::table::FrequencyTable;
use crate::record::MessageRecord;

const VS16: char = '\u{FE0F}';

/// Classifies one grapheme cluster.
fn lookup(grapheme: &str) -> Option<&'static emojis::Emoji> {
    let mut chars = grapheme.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii() {
            return None;
        }
    }

    emojis::get(grapheme).or_else(|| {
        if grapheme.contains(VS16) {
            emojis::get(&grapheme.replace(VS16, ""))
        } else {
            emojis::get(&format!("{grapheme}{VS16}"))
        }
    })
}

/// Iterates over the emoji in `text`, in order, as canonical strings.
///
/// ```rust
/// use chatstat::analysis::emojis_in;
///
/// let found: Vec<&str> = emojis_in("hi 👋🏽 🇫🇷!").collect();
/// assert_eq!(found, ["👋🏽", "🇫🇷"]);
/// ```
pub fn emojis_in(text: &str) -> impl Iterator<Item = &'static str> + '_ {
    text.graphemes(true)
        .filter_map(lookup)
        .map(emojis::Emoji::as_str)
}

/// Returns `true` if `token` is made of emoji only.
pub fn is_emoji_only(token: &str) -> bool {
    !token.is_empty() && token.graphemes(true).all(|g| lookup(g).is_some())
}

/// Counts emoji in the selected records, system notifications excluded.
pub fn emoji_frequency(records: &[MessageRecord], filter: &SenderFilter) -> FrequencyTable {
    FrequencyTable::from_occurrences(
        select(records, filter)
            .filter(|r| !r.is_system())
            .flat_map(|r| emojis_in(&r.body)),
    )
}
