//! Volume totals for a selection.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::analysis::links::count_links;
use crate::analysis::{SenderFilter, select};
use crate::record::MessageRecord;

/// Totals over the records matching one sender filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountSummary {
    /// Selected records, system notifications included
    pub total_messages: usize,
    /// Whitespace-separated tokens across all bodies
    pub total_words: usize,
    /// Characters across all bodies
    pub total_characters: usize,
    /// Records whose body is the media placeholder
    pub total_media: usize,
    /// Sender with the most messages; ties go to whoever spoke first
    pub most_active_sender: Option<String>,
    /// URLs across all bodies
    pub total_links: usize,
}

/// Computes [`CountSummary`] for the selection.
///
/// Group notifications count towards every total but never become the most
/// active sender.
pub fn count_summary(records: &[MessageRecord], filter: &SenderFilter) -> CountSummary {
    let mut summary = CountSummary::default();
    // sender -> (messages, index of first message)
    let mut per_sender: HashMap<&str, (usize, usize)> = HashMap::new();

    for (index, record) in select(records, filter).enumerate() {
        summary.total_messages += 1;
        summary.total_words += record.word_count();
        summary.total_characters += record.char_count();
        summary.total_links += count_links(&record.body);
        if record.is_media() {
            summary.total_media += 1;
        }
        if !record.is_system() {
            per_sender.entry(record.sender.as_str()).or_insert((0, index)).0 += 1;
        }
    }

    summary.most_active_sender = per_sender
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(sender, _)| sender.to_string());

    summary
}

/// Distinct human senders, sorted ascending.
///
/// ```rust
/// use chatstat::analysis::senders;
/// use chatstat::parser::LogParser;
///
/// let raw = "01/01/23, 10:00 - Zoe: hi\n01/01/23, 10:01 - Alice added Bob\n01/01/23, 10:02 - Bob: yo";
/// let records = LogParser::new().parse_str(raw)?;
/// assert_eq!(senders(&records), ["Bob", "Zoe"]);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn senders(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.is_system())
        .map(|r| r.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
