//! Calendar-day bucketing helpers.
//!
//! Everything in the engine that compares days does it through
//! [`CalendarDate`] and its `YYYY-MM-DD` key -- never through raw
//! instants. Instant comparison is reserved for the unlock primitive,
//! where sub-day precision actually matters.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar day in the user's local timezone.
///
/// Wraps a [`NaiveDate`]; serializes as the canonical `YYYY-MM-DD`
/// key, which is also the storage and comparison form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Convert a UTC instant to the calendar day it falls on at the
    /// given offset from UTC (minutes east, e.g. JST = 540).
    pub fn from_instant(instant: DateTime<Utc>, offset_minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
        Self(instant.with_timezone(&offset).date_naive())
    }

    /// Canonical `YYYY-MM-DD` storage/comparison key.
    pub fn key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Parse a `YYYY-MM-DD` key back into a date.
    pub fn parse_key(key: &str) -> Option<Self> {
        NaiveDate::parse_from_str(key, "%Y-%m-%d").ok().map(Self)
    }

    /// Signed difference `self - other` in whole calendar days.
    pub fn days_between(&self, other: &CalendarDate) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// The most recent Sunday at or before this date. Weeks run
    /// Sunday through Saturday.
    pub fn start_of_week(&self) -> Self {
        let back = self.0.weekday().num_days_from_sunday() as i64;
        Self(self.0 - Duration::days(back))
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Short weekday label for chart axes ("Sun".."Sat").
    pub fn day_label(&self) -> &'static str {
        match self.0.weekday().num_days_from_sunday() {
            0 => "Sun",
            1 => "Mon",
            2 => "Tue",
            3 => "Wed",
            4 => "Thu",
            5 => "Fri",
            _ => "Sat",
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
