//! Statistics over parsed message records.
//!
//! Every function here is a pure function of `(records, filter)`: nothing is
//! cached, nothing is mutated, and an empty selection yields empty tables
//! rather than an error.
//!
//! - [`summary`] - message/word/character/media/link totals, most active sender
//! - [`ranking`] - per-sender rankings and message share
//! - [`timeline`] - per-date, per-month, per-weekday and per-hour histograms
//! - [`words`] - tokenizer and word-frequency table
//! - [`emoji`] - emoji-frequency table
//! - [`report`] - everything above bundled for one sender filter
//!
//! # Example
//!
//! ```rust
//! use chatstat::analysis::{SenderFilter, active_user_ranking, count_summary};
//! use chatstat::parser::LogParser;
//!
//! let raw = "01/01/23, 10:00 - Alice: Hello https://example.com\n\
//!            01/01/23, 10:01 - Bob: Hi\n\
//!            01/01/23, 10:02 - Alice: 👋";
//! let records = LogParser::new().parse_str(raw)?;
//!
//! let summary = count_summary(&records, &SenderFilter::All);
//! assert_eq!(summary.total_messages, 3);
//! assert_eq!(summary.total_links, 1);
//! assert_eq!(summary.most_active_sender.as_deref(), Some("Alice"));
//!
//! let ranking = active_user_ranking(&records, &SenderFilter::All);
//! assert_eq!(ranking[0].key, "Alice");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

pub mod emoji;
pub mod links;
pub mod ranking;
pub mod report;
pub mod stopwords;
pub mod summary;
pub mod table;
pub mod timeline;
pub mod words;

pub use emoji::{emoji_frequency, emojis_in, is_emoji_only};
pub use links::{count_links, is_link};
pub use ranking::{Share, active_user_ranking, character_ranking, media_ranking, message_share};
pub use report::{Rankings, Report, analyze};
pub use stopwords::StopWords;
pub use summary::{CountSummary, count_summary, senders};
pub use table::{Count, FrequencyTable};
pub use timeline::{Histogram, MonthKey, TemporalHistograms, temporal_histograms, weekday_name};
pub use words::{tokenize, word_frequency};

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Which records an aggregation looks at.
///
/// Parses from a string: exactly `ALL` selects every record, anything else
/// selects one sender by exact name (so a contact called "All" stays reachable).
///
/// ```rust
/// use chatstat::analysis::SenderFilter;
///
/// assert_eq!("ALL".parse::<SenderFilter>().unwrap(), SenderFilter::All);
/// assert_eq!(
///     "Alice".parse::<SenderFilter>().unwrap(),
///     SenderFilter::Sender("Alice".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderFilter {
    /// Every record, including group notifications
    #[default]
    All,
    /// Records whose sender equals this name exactly
    Sender(String),
}

impl SenderFilter {
    /// Creates a filter for one sender.
    pub fn sender(name: impl Into<String>) -> Self {
        SenderFilter::Sender(name.into())
    }

    /// Returns `true` if `record` is part of the selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            SenderFilter::All => true,
            SenderFilter::Sender(name) => record.sender == *name,
        }
    }

    /// Returns `true` for [`SenderFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, SenderFilter::All)
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderFilter::All => write!(f, "ALL"),
            SenderFilter::Sender(name) => write!(f, "{name}"),
        }
    }
}

impl std::str::FromStr for SenderFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "ALL" {
            Ok(SenderFilter::All)
        } else {
            Ok(SenderFilter::Sender(trimmed.to_string()))
        }
    }
}

/// Iterates over the records matching `filter`, in file order.
pub fn select<'a>(
    records: &'a [MessageRecord],
    filter: &'a SenderFilter,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records.iter().filter(move |r| filter.matches(r))
}

/// A non-fatal condition met while aggregating.
///
/// Each warning comes with an empty (but valid) table; callers display it as
/// an informational note, never as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationWarning {
    /// The sender filter matched no record.
    EmptySelection { filter: String },
    /// No emoji in the selected messages.
    NoEmoji,
    /// No link in the selected messages.
    NoLinks,
    /// Nothing left after stopword, link and emoji filtering.
    NoWords,
}

impl std::fmt::Display for AggregationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationWarning::EmptySelection { filter } => {
                write!(f, "no messages match sender '{filter}'")
            }
            AggregationWarning::NoEmoji => write!(f, "no emoji were sent"),
            AggregationWarning::NoLinks => write!(f, "no links were shared"),
            AggregationWarning::NoWords => write!(f, "no words left after filtering"),
        }
    }
}
