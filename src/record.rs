//! The normalized message record produced by the log parser.
//!
//! One [`MessageRecord`] exists per *logical* message: a header line plus any
//! continuation lines that followed it. Records keep the order in which they
//! appear in the export.
//!
//! # Examples
//!
//! ```
//! use chatstat::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let msg = MessageRecord::new(ts, "Alice", "Hello\nworld");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.word_count(), 2);
//! assert_eq!(msg.char_count(), 11);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sender assigned to group notifications ("Alice added Bob", "Bob left").
///
/// This is the default; [`ParserConfig::with_system_sender`](crate::config::ParserConfig::with_system_sender)
/// can pick a different value when it would clash with a real participant.
pub const SYSTEM_SENDER: &str = "group_notification";

/// A single logical message from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time as written in the export |
/// | `sender` | `String` | Author, or the system sentinel for notifications |
/// | `body` | `String` | Text, continuation lines joined with `\n` |
/// | `system` | `bool` | Group notification without a human author |
/// | `media` | `bool` | Body is the media-omitted placeholder |
/// | `deleted` | `bool` | Body is a deleted-message placeholder |
///
/// Exports carry no time zone, so timestamps stay naive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Message text. May be empty, never absent.
    pub body: String,

    /// `true` for group notifications.
    #[serde(default)]
    pub system: bool,

    /// `true` when the body is the media-omitted placeholder.
    #[serde(default)]
    pub media: bool,

    /// `true` when the body is a deleted-message placeholder.
    #[serde(default)]
    pub deleted: bool,
}

impl MessageRecord {
    /// Creates a regular (non-system, non-media) record.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            system: false,
            media: false,
            deleted: false,
        }
    }

    /// Creates a group notification attributed to [`SYSTEM_SENDER`].
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self {
            system: true,
            ..Self::new(timestamp, SYSTEM_SENDER, body)
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Marks the record as a media placeholder.
    #[must_use]
    pub fn with_media(mut self, media: bool) -> Self {
        self.media = media;
        self
    }

    /// Marks the record as a deleted-message placeholder.
    #[must_use]
    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns `true` for group notifications.
    pub fn is_system(&self) -> bool {
        self.system
    }

    /// Returns `true` when the body is the media-omitted placeholder.
    pub fn is_media(&self) -> bool {
        self.media
    }

    /// Returns `true` when the body is a deleted-message placeholder.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Number of Unicode scalar values in the body.
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}
