//! Writers for parsed records and analysis reports.
//!
//! Records:
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited CSV (`csv-output` feature)
//! - [`write_json`] / [`to_json`] - JSON array (`json-output` feature)
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line (`json-output` feature)
//!
//! Reports:
//! - [`report_to_json`] - the full [`Report`](crate::analysis::Report) as JSON
//! - [`render_text`] - a human-readable summary
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::output::{OutputConfig, to_csv};
//! use chatstat::parser::LogParser;
//!
//! let records = LogParser::new().parse_str("01/01/23, 10:00 - Alice: Hello")?;
//! let csv = to_csv(&records, &OutputConfig::new())?;
//! assert!(csv.contains("2023-01-01 10:00:00;Alice;Hello"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text::{TextReport, render_text};

use serde::{Deserialize, Serialize};

use crate::record::MessageRecord;

/// Timestamp layout used by every record writer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which records and columns the record writers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit the `system`, `media` and `deleted` flags
    pub include_flags: bool,
    /// Keep group notifications
    pub include_system: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_flags: true,
            include_system: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only timestamp, sender and body.
    pub fn minimal() -> Self {
        Self {
            include_flags: false,
            include_system: true,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, include: bool) -> Self {
        self.include_flags = include;
        self
    }

    #[must_use]
    pub fn with_system(mut self, include: bool) -> Self {
        self.include_system = include;
        self
    }

    pub(crate) fn keeps(&self, record: &MessageRecord) -> bool {
        self.include_system || !record.is_system()
    }
}

/// Flattened record as written by the JSON and JSONL writers.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct RecordRow<'a> {
    timestamp: String,
    sender: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

#[cfg(feature = "json-output")]
impl<'a> RecordRow<'a> {
    fn new(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        let flag = |value: bool| config.include_flags.then_some(value);
        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sender: &record.sender,
            body: &record.body,
            system: flag(record.system),
            media: flag(record.media),
            deleted: flag(record.deleted),
        }
    }
}
