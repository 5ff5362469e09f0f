//! Message header detection.
//!
//! A header line looks like
//!
//! ```text
//! 01/01/23, 10:00 am - Alice: Hello
//! 15/01/2024, 22:41 - Bob added Carol
//! ```
//!
//! i.e. `<date>, <time> - <rest>` where `<rest>` is either `<sender>: <body>`
//! or the free text of a group notification. Lines are expected to have gone
//! through [`normalize_line`](super::normalize::normalize_line) first.

use std::sync::LazyLock;

use regex::Regex;

// date: 1-2 digits, separator, 1-2 digits, separator, 2 or 4 digit year
// time: h:mm or hh:mm, optional :ss, optional am/pm in any of a.m./AM/p. m. spellings
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2})[/.](\d{1,2})[/.](\d{4}|\d{2}), (\d{1,2}):(\d{2})(?::(\d{2}))?(?: ?([AaPp])\.? ?[Mm]\.?)? [-–] (.*)$",
    )
    .expect("header pattern is valid")
});

/// Morning/afternoon marker of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// The numeric fields of a header timestamp, before the date order is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStamp {
    /// First date component (day or month depending on locale)
    pub first: u32,
    /// Second date component
    pub second: u32,
    /// Four-digit year (two-digit years are mapped into 2000..=2099)
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub seconds: u32,
    /// `None` for 24-hour clocks
    pub meridiem: Option<Meridiem>,
}

/// A line that matched the header pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub stamp: RawStamp,
    /// Everything after the ` - ` delimiter
    pub rest: &'a str,
}

/// What follows the delimiter of a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderContent<'a> {
    /// `<sender>: <body>`
    Message { sender: &'a str, body: &'a str },
    /// Group notification without an author segment
    Notification(&'a str),
}

/// Matches a normalized line against the header pattern.
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = HEADER_RE.captures(line)?;

    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year_str = caps.get(3)?.as_str();
    let year: i32 = year_str.parse().ok()?;
    let year = if year_str.len() == 2 { 2000 + year } else { year };

    let meridiem = caps.get(7).map(|m| {
        if m.as_str().eq_ignore_ascii_case("a") {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    });

    Some(HeaderLine {
        stamp: RawStamp {
            first: num(1)?,
            second: num(2)?,
            year,
            hour: num(4)?,
            minute: num(5)?,
            seconds: num(6).unwrap_or(0),
            meridiem,
        },
        rest: caps.get(8)?.as_str(),
    })
}

// notifications whose free text can quote a colon before any sender would
const QUOTING_NOTIFICATIONS: &[&str] = &[
    "changed the subject",
    "changed this group's description",
    "changed the group description",
];

/// Splits the part after the delimiter into sender and body.
///
/// The sender ends at the first colon. There is no sender segment when that
/// colon opens a URL (`https://` in an invite-link notice) or when the text
/// before it is a subject or description change quoting the new value.
pub fn split_sender(rest: &str) -> HeaderContent<'_> {
    let Some(idx) = rest.find(':') else {
        return HeaderContent::Notification(rest.trim());
    };

    let sender = rest[..idx].trim();
    let body = &rest[idx + 1..];
    if sender.is_empty()
        || body.starts_with("//")
        || QUOTING_NOTIFICATIONS.iter().any(|phrase| sender.contains(phrase))
    {
        return HeaderContent::Notification(rest.trim());
    }

    HeaderContent::Message {
        sender,
        body: body.trim(),
    }
}
