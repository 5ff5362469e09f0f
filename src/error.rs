//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum covering every fatal
//! condition in the library. Only three things can actually stop a run:
//!
//! - the input cannot be read (I/O, UTF-8, archive errors),
//! - an archive holds no text entry to analyse ([`ChatstatError::NoContent`]),
//! - the text contains no recognisable message header ([`ChatstatError::Parse`]).
//!
//! Everything that goes wrong *after* parsing (no emoji, no links, a sender
//! filter that matches nobody) is not an error at all: it is reported as an
//! [`AggregationWarning`](crate::analysis::AggregationWarning) next to an
//! empty table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// Reading the export or writing a records file failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognised chat export.
    ///
    /// Raised when not a single line of the text matches the message header
    /// pattern. Callers should report "unrecognized export format" and stop;
    /// there is nothing meaningful to aggregate.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// Export flavour, always "WhatsApp TXT" for now
        format: &'static str,
        #[source]
        source: ParseErrorKind,
        /// Export on disk, when the text came from a file
        path: Option<PathBuf>,
    },

    /// An archive was read successfully but holds no chat transcript.
    #[error("No content found in {archive}: expected an entry matching {expected}")]
    NoContent {
        /// Name of the archive that was searched
        archive: String,
        /// Pattern the entry name had to match
        expected: &'static str,
    },

    /// The archive itself could not be read.
    #[cfg(feature = "archive")]
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A value does not have the expected shape: an unknown records
    /// extension, or an output format whose feature is compiled out.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        format: &'static str,
        message: String,
    },

    /// A calendar date given on the command line could not be read.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },

    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The export (or the archive entry holding it) is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// What was being decoded
        context: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Why an export was rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// No line matched the message header pattern
    #[error("no message header found in {lines} line(s)")]
    NoHeaders {
        /// Number of physical lines that were inspected
        lines: usize,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "export decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates the "unrecognized export format" error.
    pub fn no_headers(lines: usize, path: Option<PathBuf>) -> Self {
        ChatstatError::Parse {
            format: "WhatsApp TXT",
            source: ParseErrorKind::NoHeaders { lines },
            path,
        }
    }

    /// Creates an error for an archive without a `*.txt` entry.
    pub fn no_content(archive: impl Into<String>) -> Self {
        ChatstatError::NoContent {
            archive: archive.into(),
            expected: "*.txt",
        }
    }

    /// Creates an [`InvalidFormat`](ChatstatError::InvalidFormat) error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an [`InvalidDate`](ChatstatError::InvalidDate) error expecting `YYYY-MM-DD`.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Attaches a file path to a parse error; other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatError::Parse { format, source, .. } => ChatstatError::Parse {
                format,
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` for [`ChatstatError::Io`].
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` when the input was not a recognisable export.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatError::Parse { .. })
    }

    /// Returns `true` if an archive had nothing to analyse.
    pub fn is_no_content(&self) -> bool {
        matches!(self, ChatstatError::NoContent { .. })
    }

    /// Returns `true` for [`ChatstatError::InvalidFormat`].
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }
}
