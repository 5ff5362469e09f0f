//! Date-order detection and timestamp construction.
//!
//! `01/02/23` is ambiguous on its own, so the order is settled once for the
//! whole export: every header votes for the orders under which its date is
//! valid, and the order with most votes wins. A single export never mixes
//! locales, so lines are never re-sniffed individually.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::header::{Meridiem, RawStamp};
use crate::config::DateOrder;

/// A concrete date component order, as resolved for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldOrder {
    /// `DD/MM/YY`
    DayFirst,
    /// `MM/DD/YY`
    MonthFirst,
}

impl FieldOrder {
    /// Builds the calendar date for `stamp` under this order.
    pub fn date(self, stamp: &RawStamp) -> Option<NaiveDate> {
        let (day, month) = match self {
            FieldOrder::DayFirst => (stamp.first, stamp.second),
            FieldOrder::MonthFirst => (stamp.second, stamp.first),
        };
        NaiveDate::from_ymd_opt(stamp.year, month, day)
    }
}

impl std::fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldOrder::DayFirst => write!(f, "day-first"),
            FieldOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

/// Picks the field order for an export.
///
/// A forced order in the configuration wins outright. Otherwise the order
/// under which more header dates are valid is chosen, day-first on a tie.
pub fn resolve_order<'a, I>(stamps: I, preference: DateOrder) -> FieldOrder
where
    I: IntoIterator<Item = &'a RawStamp>,
{
    match preference {
        DateOrder::DayFirst => return FieldOrder::DayFirst,
        DateOrder::MonthFirst => return FieldOrder::MonthFirst,
        DateOrder::Auto => {}
    }

    let mut day_first = 0usize;
    let mut month_first = 0usize;

    for stamp in stamps {
        if FieldOrder::DayFirst.date(stamp).is_some() {
            day_first += 1;
        }
        if FieldOrder::MonthFirst.date(stamp).is_some() {
            month_first += 1;
        }
    }

    if month_first > day_first {
        FieldOrder::MonthFirst
    } else {
        FieldOrder::DayFirst
    }
}

/// Converts the clock fields to a time of day.
///
/// With a meridiem the hour must be 1..=12 (`12 am` is midnight, `12 pm` noon);
/// without one it must be 0..=23.
pub fn time_of_day(stamp: &RawStamp) -> Option<NaiveTime> {
    let hour = match stamp.meridiem {
        None => stamp.hour,
        Some(_) if !(1..=12).contains(&stamp.hour) => return None,
        Some(Meridiem::Am) => stamp.hour % 12,
        Some(Meridiem::Pm) => stamp.hour % 12 + 12,
    };
    NaiveTime::from_hms_opt(hour, stamp.minute, stamp.seconds)
}

/// Builds the full timestamp, or `None` if the date or time is impossible.
pub fn build_timestamp(stamp: &RawStamp, order: FieldOrder) -> Option<NaiveDateTime> {
    Some(order.date(stamp)?.and_time(time_of_day(stamp)?))
}
