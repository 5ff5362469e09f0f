//! # Chatstat
//!
//! Statistics for WhatsApp chat exports.
//!
//! ## Overview
//!
//! An export is a plain-text transcript (optionally zipped together with the
//! media it references). Chatstat turns it into an ordered list of
//! [`MessageRecord`]s and computes summary tables over them: volume totals,
//! per-sender rankings, activity over time, word and emoji frequencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! let raw = "01/01/23, 10:00 am - Alice: Hello\nworld\n\
//!            01/01/23, 10:01 am - Bob: Hi Alice 👋\n\
//!            02/01/23, 9:00 am - Alice added Carol";
//!
//! let records = LogParser::new().parse_str(raw)?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].body, "Hello\nworld");
//! assert_eq!(records[2].sender, SYSTEM_SENDER);
//!
//! let report = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
//! assert_eq!(report.summary.total_messages, 3);
//! assert_eq!(report.top_emojis[0].key, "👋");
//! # Ok::<(), ChatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`]: export text to records
//! - [`parsing`] - the parser's stages (line normalisation, header matching,
//!   date-order resolution, continuation joining)
//! - [`archive`] - reading `.txt` and `.zip` exports from disk
//! - [`analysis`] - aggregations and the combined [`Report`](analysis::Report)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`output`] / [`format`] - record writers (CSV, JSON, JSONL) and report rendering
//! - [`record`] - [`MessageRecord`]
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - `cli` - CLI argument types (feature `cli`)
//! - [`prelude`] - convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (date-order resolution, dropped
//! preamble lines, out-of-order timestamps) and never installs a subscriber.

pub mod analysis;
pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;

pub use error::{ChatstatError, Result};
pub use parser::LogParser;
pub use record::{MessageRecord, SYSTEM_SENDER};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatstatError, Result};
    pub use crate::record::{MessageRecord, SYSTEM_SENDER};

    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
    pub use crate::parser::{LogParser, ParseStats, ParsedExport};

    pub use crate::analysis::{
        AggregationWarning, Count, CountSummary, FrequencyTable, Report, SenderFilter, StopWords,
        active_user_ranking, analyze, character_ranking, count_summary, emoji_frequency,
        media_ranking, message_share, senders, temporal_histograms, word_frequency,
    };

    pub use crate::archive::load_export;
    pub use crate::format::{RecordFormat, ReportFormat, to_format_string, write_to_format};
    pub use crate::output::{OutputConfig, render_text};
}
