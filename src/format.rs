//! Output format types, independent of the CLI.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::format::{RecordFormat, to_format_string};
//! use chatstat::output::OutputConfig;
//! use chatstat::parser::LogParser;
//!
//! let records = LogParser::new().parse_str("01/01/23, 10:00 - Alice: Hello")?;
//! let jsonl = to_format_string(&records, RecordFormat::Jsonl, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//!
//! let format = RecordFormat::from_path("records.csv")?;
//! assert_eq!(format, RecordFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::output::OutputConfig;
use crate::record::MessageRecord;

/// File format for exported records.
///
/// ```rust
/// use chatstat::format::RecordFormat;
/// use std::str::FromStr;
///
/// let format = RecordFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, RecordFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RecordFormat {
    /// Semicolon-delimited CSV
    #[default]
    Csv,
    /// JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

impl RecordFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Json => "json",
            RecordFormat::Jsonl => "jsonl",
        }
    }

    /// Accepted names for [`FromStr`](std::str::FromStr).
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [RecordFormat] {
        &[RecordFormat::Csv, RecordFormat::Json, RecordFormat::Jsonl]
    }

    /// Cargo feature needed to write this format.
    pub fn feature(&self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv-output",
            RecordFormat::Json | RecordFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(RecordFormat::Csv),
            "json" => Ok(RecordFormat::Json),
            "jsonl" | "ndjson" => Ok(RecordFormat::Jsonl),
            _ => Err(ChatstatError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}', expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFormat::Csv => write!(f, "CSV"),
            RecordFormat::Json => write!(f, "JSON"),
            RecordFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(RecordFormat::Csv),
            "json" => Ok(RecordFormat::Json),
            "jsonl" | "ndjson" => Ok(RecordFormat::Jsonl),
            _ => Err(format!(
                "unknown format '{s}', expected one of: {}",
                RecordFormat::all_names().join(", ")
            )),
        }
    }
}

/// How an analysis report is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

fn missing_feature(format: RecordFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "output",
        format!(
            "{format} output requires the '{}' feature to be enabled",
            format.feature()
        ),
    )
}

/// Writes records to a file in the given format.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: impl AsRef<Path>,
    format: RecordFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        RecordFormat::Csv => crate::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        RecordFormat::Json => crate::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        RecordFormat::Jsonl => crate::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[MessageRecord],
    format: RecordFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        RecordFormat::Csv => crate::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        RecordFormat::Json => crate::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        RecordFormat::Jsonl => crate::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
