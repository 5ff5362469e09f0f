//! Continuation joining.
//!
//! Header detection only decides which physical lines start a message. This
//! module owns the second stage: folding the lines that follow a header into
//! its body. It is a two-state machine:
//!
//! ```text
//!              header                    header
//! AwaitingHeader ─────▶ InMessage ◀──────────────┐
//!      │                   │  └──── (flush) ─────┘
//!      │ other line        │ other line
//!      ▼                   ▼
//!   orphan           append "\n" + line
//! ```

use chrono::NaiveDateTime;

use super::header::HeaderContent;
use super::normalize::clean_edges;
use crate::config::ParserConfig;
use crate::record::MessageRecord;

/// Observable state of a [`MessageAssembler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// No header seen yet; stray lines are orphans.
    AwaitingHeader,
    /// A message is open and accepts continuation lines.
    InMessage,
}

#[derive(Debug)]
enum Author {
    Person(String),
    System,
}

#[derive(Debug)]
struct Pending {
    timestamp: NaiveDateTime,
    author: Author,
    body: String,
}

#[derive(Debug)]
enum State {
    AwaitingHeader,
    InMessage(Pending),
}

/// Builds [`MessageRecord`]s from classified lines.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
/// use chatstat::parsing::{HeaderContent, MessageAssembler};
/// use chrono::NaiveDate;
///
/// let config = ParserConfig::default();
/// let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// let mut assembler = MessageAssembler::new(&config);
/// assembler.push_header(ts, HeaderContent::Message { sender: "Alice", body: "Hello" });
/// assembler.push_continuation("world");
///
/// let records = assembler.finish();
/// assert_eq!(records[0].body, "Hello\nworld");
/// ```
#[derive(Debug)]
pub struct MessageAssembler<'c> {
    config: &'c ParserConfig,
    state: State,
    records: Vec<MessageRecord>,
    continuation_lines: usize,
    orphan_lines: usize,
}

impl<'c> MessageAssembler<'c> {
    /// Creates an assembler in the [`AwaitingHeader`](AssemblerState::AwaitingHeader) state.
    pub fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            state: State::AwaitingHeader,
            records: Vec::new(),
            continuation_lines: 0,
            orphan_lines: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> AssemblerState {
        match self.state {
            State::AwaitingHeader => AssemblerState::AwaitingHeader,
            State::InMessage(_) => AssemblerState::InMessage,
        }
    }

    /// Closes the open message (if any) and opens a new one.
    pub fn push_header(&mut self, timestamp: NaiveDateTime, content: HeaderContent<'_>) {
        let (author, body) = match content {
            HeaderContent::Message { sender, body } => (Author::Person(sender.to_string()), body),
            HeaderContent::Notification(text) => (Author::System, text),
        };

        let next = State::InMessage(Pending {
            timestamp,
            author,
            body: clean_edges(body).to_string(),
        });

        if let State::InMessage(done) = std::mem::replace(&mut self.state, next) {
            self.emit(done);
        }
    }

    /// Appends a non-header line to the open message.
    ///
    /// Returns `false` when there is no open message; the line is counted as
    /// an orphan and dropped.
    pub fn push_continuation(&mut self, line: &str) -> bool {
        match &mut self.state {
            State::InMessage(pending) => {
                pending.body.push('\n');
                pending.body.push_str(clean_edges(line));
                self.continuation_lines += 1;
                true
            }
            State::AwaitingHeader => {
                self.orphan_lines += 1;
                false
            }
        }
    }

    /// Number of lines appended to a message so far.
    pub fn continuation_lines(&self) -> usize {
        self.continuation_lines
    }

    /// Number of lines dropped because no header preceded them.
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    /// Flushes the open message and returns every record in encounter order.
    pub fn finish(mut self) -> Vec<MessageRecord> {
        if let State::InMessage(done) = std::mem::replace(&mut self.state, State::AwaitingHeader) {
            self.emit(done);
        }
        self.records
    }

    fn emit(&mut self, pending: Pending) {
        let record = match pending.author {
            Author::Person(sender) => {
                let media = self.config.is_media(&pending.body);
                let deleted = self.config.is_deleted(&pending.body);
                MessageRecord::new(pending.timestamp, sender, pending.body)
                    .with_media(media)
                    .with_deleted(deleted)
            }
            Author::System => MessageRecord {
                system: true,
                ..MessageRecord::new(
                    pending.timestamp,
                    self.config.system_sender.clone(),
                    pending.body,
                )
            },
        };
        self.records.push(record);
    }
}
