//! Activity over time.
//!
//! Four groupings of the selected records: by calendar date, by month, by
//! weekday and by hour of day. Each record falls into exactly one bucket of
//! each grouping, using the time its header carries.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::analysis::table::Count;
use crate::analysis::{SenderFilter, select};
use crate::record::MessageRecord;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A calendar month. Orders chronologically; displays as `January 2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("?");
        write!(f, "{name} {}", self.year)
    }
}

/// Counts keyed by a time bucket, stored in the bucket's natural order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram<K> {
    entries: Vec<Count<K>>,
}

impl<K> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq> Histogram<K> {
    fn from_entries(entries: Vec<Count<K>>) -> Self {
        Self { entries }
    }

    /// Buckets in natural order (chronological, Monday first, hour 0 first).
    pub fn entries(&self) -> &[Count<K>] {
        &self.entries
    }

    /// Buckets by count descending; equal counts keep natural order.
    pub fn by_count(&self) -> Vec<Count<K>> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    /// The `n` busiest buckets, ignoring empty ones.
    pub fn top(&self, n: usize) -> Vec<Count<K>> {
        self.by_count()
            .into_iter()
            .filter(|c| c.count > 0)
            .take(n)
            .collect()
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.entries.iter().find(|c| c.key == *key).map(|c| c.count)
    }

    /// Sum of all buckets.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four time groupings of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemporalHistograms {
    /// Dates with at least one message, chronological
    pub by_date: Histogram<NaiveDate>,
    /// Months with at least one message, chronological
    pub by_month: Histogram<MonthKey>,
    /// All seven days, Monday first
    pub by_weekday: Histogram<Weekday>,
    /// All 24 hours
    pub by_hour: Histogram<u32>,
}

impl TemporalHistograms {
    /// Busiest dates, ties by earlier date.
    pub fn top_days(&self, n: usize) -> Vec<Count<NaiveDate>> {
        self.by_date.top(n)
    }
}

/// Groups the selected records by date, month, weekday and hour.
///
/// ```rust
/// use chatstat::analysis::{SenderFilter, temporal_histograms};
/// use chatstat::parser::LogParser;
///
/// let raw = "01/01/23, 10:00 - A: x\n01/01/23, 10:30 - B: y\n02/01/23, 23:59 - A: z";
/// let records = LogParser::new().parse_str(raw)?;
/// let hist = temporal_histograms(&records, &SenderFilter::All);
///
/// assert_eq!(hist.by_date.entries().len(), 2);
/// assert_eq!(hist.by_hour.get(&10), Some(2));
/// assert_eq!(hist.by_hour.get(&23), Some(1));
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn temporal_histograms(records: &[MessageRecord], filter: &SenderFilter) -> TemporalHistograms {
    let mut dates: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut months: BTreeMap<MonthKey, usize> = BTreeMap::new();
    let mut weekdays = [0usize; 7];
    let mut hours = [0usize; 24];

    for record in select(records, filter) {
        let date = record.timestamp.date();
        *dates.entry(date).or_default() += 1;
        *months.entry(MonthKey::of(date)).or_default() += 1;
        weekdays[date.weekday().num_days_from_monday() as usize] += 1;
        hours[record.timestamp.hour() as usize] += 1;
    }

    TemporalHistograms {
        by_date: Histogram::from_entries(
            dates.into_iter().map(|(k, v)| Count::new(k, v)).collect(),
        ),
        by_month: Histogram::from_entries(
            months.into_iter().map(|(k, v)| Count::new(k, v)).collect(),
        ),
        by_weekday: Histogram::from_entries(
            WEEK.iter()
                .zip(weekdays)
                .map(|(day, count)| Count::new(*day, count))
                .collect(),
        ),
        by_hour: Histogram::from_entries(
            (0u32..24)
                .zip(hours)
                .map(|(hour, count)| Count::new(hour, count))
                .collect(),
        ),
    }
}
