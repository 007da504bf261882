//! Calendar association for dated records.
//!
//! The events calendar asks two questions of its records: which fall on the
//! selected day, and which fall in the displayed month. Both compare plain
//! calendar components (day, month, year) of `NaiveDate` values; no timezone
//! conversion happens on either side.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{DaycareError, Result};

/// Number of events a calendar cell shows before flagging overflow.
pub const INDICATOR_LIMIT: usize = 3;

/// A record pinned to a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Lets an already-filtered `Vec<&T>` go through the calendar operations.
impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

/// A calendar month used as a month-granularity reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    first: NaiveDate,
}

impl MonthRef {
    /// Build a month reference; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| DaycareError::InvalidInput(format!("Invalid month: {year}-{month:02}")))
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parse a `YYYY-MM` string.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(|first| Self { first })
            .map_err(|_| {
                DaycareError::InvalidInput(format!(
                    "Invalid month (expected YYYY-MM): {value}"
                ))
            })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// True when `date` has this month's (month, year).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month() && date.year() == self.year()
    }

    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    pub fn previous(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Marker for a calendar cell: the first few events on that day, in input
/// order, and whether more were hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct DayIndicator<'a, T> {
    pub shown: Vec<&'a T>,
    pub overflow: bool,
}

/// Records whose (day, month, year) equals `date`.
pub fn events_on<T: Dated>(events: &[T], date: NaiveDate) -> Vec<&T> {
    events
        .iter()
        .filter(|event| {
            let d = event.date();
            d.day() == date.day() && d.month() == date.month() && d.year() == date.year()
        })
        .collect()
}

/// Records whose (month, year) equals the reference month.
pub fn events_in_month<T: Dated>(events: &[T], month: MonthRef) -> Vec<&T> {
    events
        .iter()
        .filter(|event| month.contains(event.date()))
        .collect()
}

/// Cell marker for `day`, or `None` when no record falls on it.
pub fn day_indicator<T: Dated>(events: &[T], day: NaiveDate) -> Option<DayIndicator<'_, T>> {
    let mut on_day = events_on(events, day);
    if on_day.is_empty() {
        return None;
    }
    let overflow = on_day.len() > INDICATOR_LIMIT;
    on_day.truncate(INDICATOR_LIMIT);
    Some(DayIndicator {
        shown: on_day,
        overflow,
    })
}

/// Days of `month` that carry records, ascending, each with its records in
/// input order.
pub fn month_agenda<T: Dated>(events: &[T], month: MonthRef) -> Vec<(NaiveDate, Vec<&T>)> {
    let mut days: BTreeMap<NaiveDate, Vec<&T>> = BTreeMap::new();
    for event in events_in_month(events, month) {
        days.entry(event.date()).or_default().push(event);
    }
    days.into_iter().collect()
}
