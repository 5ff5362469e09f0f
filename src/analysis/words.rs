//! Word frequency.
//!
//! Tokens are the whitespace-separated pieces of a lowercased body. A token
//! is dropped when it is a stopword, contains a URL, or consists only of
//! emoji. Media placeholders, deleted-message placeholders and group
//! notifications contribute no words at all.

use crate::analysis::emoji::is_emoji_only;
use crate::analysis::links::is_link;
use crate::analysis::stopwords::StopWords;
use crate::analysis::table::FrequencyTable;
use crate::analysis::{SenderFilter, select};
use crate::record::MessageRecord;

/// Splits `body` into counted tokens.
///
/// ```rust
/// use chatstat::analysis::{StopWords, tokenize};
///
/// let stop = StopWords::from_text("the");
/// let tokens = tokenize("The CAT saw https://x.example 😂", &stop);
/// assert_eq!(tokens, ["cat", "saw"]);
/// ```
pub fn tokenize(body: &str, stopwords: &StopWords) -> Vec<String> {
    body.to_lowercase()
        .split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .filter(|token| !is_link(token))
        .filter(|token| !is_emoji_only(token))
        .map(str::to_string)
        .collect()
}

/// Counts words in the selected records.
///
/// Ties in the returned table are broken by first occurrence in the export.
pub fn word_frequency(
    records: &[MessageRecord],
    filter: &SenderFilter,
    stopwords: &StopWords,
) -> FrequencyTable {
    FrequencyTable::from_occurrences(
        select(records, filter)
            .filter(|r| !r.is_system() && !r.is_media() && !r.is_deleted())
            .flat_map(|r| tokenize(&r.body, stopwords)),
    )
}
