//! Per-sender rankings.
//!
//! All rankings are full (callers truncate), exclude group notifications,
//! and order by count descending with ties broken by sender name ascending.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::table::{Count, rank_by_count};
use crate::analysis::{SenderFilter, select};
use crate::record::MessageRecord;

/// One sender's share of the selected messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub sender: String,
    pub messages: usize,
    /// Percentage of the selection, `0.0..=100.0`
    pub percent: f64,
}

fn rank_senders<F>(records: &[MessageRecord], filter: &SenderFilter, weight: F) -> Vec<Count<String>>
where
    F: Fn(&MessageRecord) -> usize,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in select(records, filter).filter(|r| !r.is_system()) {
        let w = weight(record);
        if w > 0 {
            *counts.entry(record.sender.clone()).or_default() += w;
        }
    }
    rank_by_count(counts)
}

/// Senders ranked by number of messages.
///
/// ```rust
/// use chatstat::analysis::{SenderFilter, active_user_ranking};
/// use chatstat::parser::LogParser;
///
/// let raw = "01/01/23, 10:00 - Zoe: a\n01/01/23, 10:01 - Amy: b";
/// let records = LogParser::new().parse_str(raw)?;
/// let ranking = active_user_ranking(&records, &SenderFilter::All);
/// assert_eq!(ranking[0].key, "Amy");
/// assert_eq!(ranking[1].key, "Zoe");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn active_user_ranking(records: &[MessageRecord], filter: &SenderFilter) -> Vec<Count<String>> {
    rank_senders(records, filter, |_| 1)
}

/// Senders ranked by total characters typed.
///
/// Senders whose messages are all empty are left out.
pub fn character_ranking(records: &[MessageRecord], filter: &SenderFilter) -> Vec<Count<String>> {
    rank_senders(records, filter, MessageRecord::char_count)
}

/// Senders ranked by number of media messages. Senders without media are left out.
pub fn media_ranking(records: &[MessageRecord], filter: &SenderFilter) -> Vec<Count<String>> {
    rank_senders(records, filter, |r| usize::from(r.is_media()))
}

/// Each sender's percentage of the selected human messages, in
/// [`active_user_ranking`] order.
#[allow(clippy::cast_precision_loss)]
pub fn message_share(records: &[MessageRecord], filter: &SenderFilter) -> Vec<Share> {
    let ranking = active_user_ranking(records, filter);
    let total: usize = ranking.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    ranking
        .into_iter()
        .map(|c| Share {
            percent: c.count as f64 * 100.0 / total as f64,
            sender: c.key,
            messages: c.count,
        })
        .collect()
}
