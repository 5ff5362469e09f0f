//! Configuration types for parsing and analysis.
//!
//! Everything that depends on the export's locale or app version (the media
//! placeholder phrase, deleted-message phrases, date order, stopwords) is an
//! explicit input here rather than a constant buried in the parser.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, DateOrder, ParserConfig};
//! use chatstat::analysis::StopWords;
//!
//! let parser_config = ParserConfig::new()
//!     .with_media_placeholder("<Medien ausgeschlossen>")
//!     .with_date_order(DateOrder::DayFirst);
//!
//! let analysis_config = AnalysisConfig::new()
//!     .with_stopwords(StopWords::from_text("der\ndie\ndas"))
//!     .with_top_words(20);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::StopWords;
use crate::record::SYSTEM_SENDER;

/// How to read the first two numbers of a header date.
///
/// `01/02/23` is the 1st of February in day-first locales and the 2nd of
/// January in month-first ones. [`Auto`](DateOrder::Auto) decides once per
/// export by looking at every header, preferring day-first when nothing in the
/// file disambiguates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Sniff the order from the export
    #[default]
    Auto,
    /// `DD/MM/YY` and `DD/MM/YYYY`
    DayFirst,
    /// `MM/DD/YY` and `MM/DD/YYYY`
    MonthFirst,
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::Auto => write!(f, "auto"),
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

/// Configuration for the export parser.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_media_placeholder("<Multimedia omitido>")
///     .with_deleted_placeholders(["Se eliminó este mensaje."]);
/// assert_eq!(config.media_placeholder, "<Multimedia omitido>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Body text the export writes in place of an attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Body texts the export writes for deleted messages
    pub deleted_placeholders: Vec<String>,

    /// Date component order (default: auto)
    pub date_order: DateOrder,

    /// Sender assigned to group notifications (default: `group_notification`)
    pub system_sender: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            media_placeholder: "<Media omitted>".to_string(),
            deleted_placeholders: vec![
                "This message was deleted".to_string(),
                "You deleted this message".to_string(),
            ],
            date_order: DateOrder::Auto,
            system_sender: SYSTEM_SENDER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media-omitted placeholder phrase.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Replaces the deleted-message placeholder phrases.
    #[must_use]
    pub fn with_deleted_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deleted_placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Forces a date order instead of sniffing it.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the sender used for group notifications.
    #[must_use]
    pub fn with_system_sender(mut self, sender: impl Into<String>) -> Self {
        self.system_sender = sender.into();
        self
    }

    /// Returns `true` if `body` is exactly the media placeholder, ignoring
    /// surrounding blank lines.
    pub fn is_media(&self, body: &str) -> bool {
        body.trim() == self.media_placeholder
    }

    /// Returns `true` if `body` is one of the deleted-message placeholders.
    pub fn is_deleted(&self, body: &str) -> bool {
        let body = body.trim();
        self.deleted_placeholders.iter().any(|p| p == body)
    }
}

/// Configuration for the aggregation stage.
///
/// The `top_*` values size the "top-N" views; the full tables are always
/// available as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Words dropped from the word-frequency table
    pub stopwords: StopWords,

    /// Rows in the word-frequency view (default: 10)
    pub top_words: usize,

    /// Rows in the emoji-frequency view (default: 10)
    pub top_emojis: usize,

    /// Rows in the sender rankings (default: 5)
    pub top_senders: usize,

    /// Rows in the busiest-days view (default: 5)
    pub top_days: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: StopWords::english(),
            top_words: 10,
            top_emojis: 10,
            top_senders: 5,
            top_days: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stopword set.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Sets the number of rows in the word-frequency view.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of rows in the emoji-frequency view.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the number of rows in the sender rankings.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Sets the number of rows in the busiest-days view.
    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.date_order, DateOrder::Auto);
        assert_eq!(config.system_sender, SYSTEM_SENDER);
        assert!(config.is_deleted("This message was deleted"));
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_media_placeholder("<Без медиафайлов>")
            .with_date_order(DateOrder::MonthFirst)
            .with_deleted_placeholders(["Сообщение удалено"]);

        assert!(config.is_media("<Без медиафайлов>"));
        assert!(!config.is_media("<Media omitted>"));
        assert!(config.is_deleted("Сообщение удалено"));
        assert!(!config.is_deleted("This message was deleted"));
        assert_eq!(config.date_order, DateOrder::MonthFirst);
    }

    #[test]
    fn test_media_match_is_verbatim() {
        let config = ParserConfig::default();
        assert!(!config.is_media("<media omitted>"));
        assert!(!config.is_media("<Media omitted> lol"));
        assert!(config.is_media("<Media omitted>\n\n"));
        assert!(config.is_deleted("This message was deleted\n"));
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_top_words(3)
            .with_top_emojis(4)
            .with_top_senders(2)
            .with_top_days(1)
            .with_stopwords(StopWords::empty());

        assert_eq!(config.top_words, 3);
        assert_eq!(config.top_emojis, 4);
        assert_eq!(config.top_senders, 2);
        assert_eq!(config.top_days, 1);
        assert!(config.stopwords.is_empty());
    }

    #[test]
    fn test_date_order_serde() {
        let json = serde_json::to_string(&DateOrder::DayFirst).unwrap();
        assert_eq!(json, "\"day-first\"");
        let parsed: DateOrder = serde_json::from_str("\"month-first\"").unwrap();
        assert_eq!(parsed, DateOrder::MonthFirst);
    }
}
