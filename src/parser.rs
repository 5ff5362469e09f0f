//! WhatsApp TXT export parser.
//!
//! Converts the raw text of one export into an ordered sequence of
//! [`MessageRecord`]s. Supported header layout:
//!
//! ```text
//! DD/MM/YY, h:mm am - Sender: Message
//! DD/MM/YYYY, HH:mm - Sender: Message
//! MM/DD/YY, h:mm pm - Sender: Message
//! DD.MM.YYYY, HH:mm:ss - Group notification text
//! ```
//!
//! Any line that is not a header continues the previous message. Parsing
//! either succeeds with at least one record or fails with
//! [`ChatstatError::Parse`]; it never returns a partial sequence.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::LogParser;
//!
//! let raw = "01/01/23, 10:00 am - Alice: Hello\nworld\n01/01/23, 10:01 am - Bob: Hi Alice";
//! let records = LogParser::new().parse_str(raw)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[0].body, "Hello\nworld");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::borrow::Cow;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::archive::load_export;
use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::parsing::{
    FieldOrder, HeaderLine, MessageAssembler, build_timestamp, match_header, normalize_line,
    resolve_order, split_sender,
};
use crate::record::MessageRecord;

/// Counters collected while parsing one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Physical lines in the input
    pub lines: usize,
    /// Lines that started a message
    pub headers: usize,
    /// Lines appended to the previous message
    pub continuation_lines: usize,
    /// Lines before the first header (dropped)
    pub orphan_lines: usize,
    /// Header-shaped lines whose date or time is impossible (kept as continuation)
    pub rejected_headers: usize,
    /// Records attributed to the system sender
    pub notifications: usize,
    /// Adjacent record pairs whose timestamps go backwards
    pub out_of_order: usize,
    /// Date order used for the whole export
    pub date_order: FieldOrder,
}

/// Records plus the counters gathered while producing them.
#[derive(Debug, Clone)]
pub struct ParsedExport {
    pub records: Vec<MessageRecord>,
    pub stats: ParseStats,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::parser::LogParser;
/// use chatstat::config::{DateOrder, ParserConfig};
///
/// let parser = LogParser::with_config(
///     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
/// );
/// let records = parser.parse("WhatsApp Chat with Bob.txt".as_ref())?;
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export from disk (`.txt`, or `.zip` with the `archive` feature).
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let content = load_export(path)?;
        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Parses export text already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        self.parse_detailed(content).map(|parsed| parsed.records)
    }

    /// Parses export text and also returns the parse counters.
    pub fn parse_detailed(&self, content: &str) -> Result<ParsedExport> {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

        // Stage 1: classify physical lines
        let lines: Vec<Cow<'_, str>> = content.lines().map(normalize_line).collect();
        let headers: Vec<Option<HeaderLine<'_>>> =
            lines.iter().map(|line| match_header(line)).collect();

        let order = resolve_order(
            headers.iter().flatten().map(|h| &h.stamp),
            self.config.date_order,
        );
        debug!(%order, candidates = headers.iter().flatten().count(), "resolved date order");

        // Stage 2: join continuation lines
        let mut assembler = MessageAssembler::new(&self.config);
        let mut header_count = 0usize;
        let mut rejected = 0usize;

        for (line, header) in lines.iter().zip(headers.iter().copied()) {
            let stamped =
                header.and_then(|h| build_timestamp(&h.stamp, order).map(|ts| (ts, h.rest)));

            match stamped {
                Some((timestamp, rest)) => {
                    assembler.push_header(timestamp, split_sender(rest));
                    header_count += 1;
                }
                None => {
                    if header.is_some() {
                        rejected += 1;
                    }
                    assembler.push_continuation(line);
                }
            }
        }

        let continuation_lines = assembler.continuation_lines();
        let orphan_lines = assembler.orphan_lines();
        let records = assembler.finish();

        if records.is_empty() {
            return Err(ChatstatError::no_headers(lines.len(), None));
        }

        if orphan_lines > 0 {
            warn!(
                lines = orphan_lines,
                "dropped lines before the first message header"
            );
        }
        if rejected > 0 {
            warn!(
                lines = rejected,
                %order,
                "header-like lines with impossible timestamps kept as message text"
            );
        }

        let out_of_order = records
            .windows(2)
            .filter(|pair| pair[0].timestamp > pair[1].timestamp)
            .count();
        if out_of_order > 0 {
            warn!(
                pairs = out_of_order,
                "timestamps go backwards; keeping file order"
            );
        }

        let stats = ParseStats {
            lines: lines.len(),
            headers: header_count,
            continuation_lines,
            orphan_lines,
            rejected_headers: rejected,
            notifications: records.iter().filter(|r| r.is_system()).count(),
            out_of_order,
            date_order: order,
        };
        debug!(?stats, "parsed export");

        Ok(ParsedExport { records, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateOrder;
    use crate::record::SYSTEM_SENDER;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_two_messages_with_continuation() {
        let raw = "01/01/23, 10:00 am - Alice: Hello\nworld\n01/01/23, 10:01 am - Bob: Hi Alice";
        let records = LogParser::new().parse_str(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sender, "Alice");
        assert_eq!(records[0].body, "Hello\nworld");
        assert_eq!(records[1].sender, "Bob");
        assert_eq!(records[1].body, "Hi Alice");
    }

    #[test]
    fn test_system_notification() {
        let raw = "02/01/23, 9:00 am - Alice added Bob";
        let records = LogParser::new().parse_str(raw).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, SYSTEM_SENDER);
        assert_eq!(records[0].body, "Alice added Bob");
        assert_eq!(
            records[0].timestamp.date(),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_no_headers_is_parse_error() {
        let err = LogParser::new()
            .parse_str("just some text\nwith no headers")
            .unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("2 line(s)"));
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(LogParser::new().parse_str("").unwrap_err().is_parse());
    }

    #[test]
    fn test_month_first_sniffed_from_file() {
        let raw = "1/2/23, 9:00 PM - Alice: first\n1/15/23, 9:00 PM - Bob: second";
        let parsed = LogParser::new().parse_detailed(raw).unwrap();

        assert_eq!(parsed.stats.date_order, FieldOrder::MonthFirst);
        assert_eq!(
            parsed.records[0].timestamp.date(),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
        );
        assert_eq!(parsed.records[0].timestamp.hour(), 21);
        assert_eq!(parsed.stats.headers, 2);
    }

    #[test]
    fn test_forced_order_rejects_impossible_dates() {
        let parser =
            LogParser::with_config(ParserConfig::new().with_date_order(DateOrder::DayFirst));
        let raw = "01/01/23, 10:00 - Alice: one\n01/15/23, 10:00 - Bob: two";
        let parsed = parser.parse_detailed(raw).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.stats.rejected_headers, 1);
        assert_eq!(parsed.records[0].body, "one\n01/15/23, 10:00 - Bob: two");
    }

    #[test]
    fn test_orphan_preamble_dropped() {
        let raw = "preamble\n01/01/23, 10:00 - Alice: Hello";
        let parsed = LogParser::new().parse_detailed(raw).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.stats.orphan_lines, 1);
        assert_eq!(parsed.stats.lines, 2);
    }

    #[test]
    fn test_directional_marks_and_narrow_spaces() {
        let raw = "\u{200E}01/01/23, 10:00\u{202F}pm \u{200F}- \u{2068}Ali\u{2069}: مرحبا";
        let records = LogParser::new().parse_str(raw).unwrap();
        assert_eq!(records[0].sender, "Ali");
        assert_eq!(records[0].body, "مرحبا");
        assert_eq!(records[0].timestamp.hour(), 22);
    }

    #[test]
    fn test_blank_lines_stay_in_body() {
        let raw = "01/01/23, 10:00 - Alice:\nsecond\n01/01/23, 10:01 - Bob: Hi\n\n01/01/23, 10:02 - Carol: x";
        let records = LogParser::new().parse_str(raw).unwrap();

        assert_eq!(records[0].body, "\nsecond");
        assert_eq!(records[1].body, "Hi\n");
        assert_eq!(records[1].char_count(), 3);
        assert_eq!(records[2].body, "x");
    }

    #[test]
    fn test_bom_and_crlf() {
        let raw = "\u{FEFF}01/01/23, 10:00 - Alice: Hello\r\nsecond line\r\n";
        let records = LogParser::new().parse_str(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body, "Hello\nsecond line");
    }

    #[test]
    fn test_out_of_order_counted() {
        let raw = "02/01/23, 10:00 - Alice: later\n01/01/23, 10:00 - Bob: earlier";
        let parsed = LogParser::new().parse_detailed(raw).unwrap();
        assert_eq!(parsed.stats.out_of_order, 1);
        assert_eq!(parsed.records[0].sender, "Alice");
    }

    #[test]
    fn test_custom_media_placeholder() {
        let parser = LogParser::with_config(
            ParserConfig::new().with_media_placeholder("<Без медиафайлов>"),
        );
        let raw = "15.01.2024, 10:30 - Муха: <Без медиафайлов>";
        let records = parser.parse_str(raw).unwrap();
        assert!(records[0].is_media());
    }
}
