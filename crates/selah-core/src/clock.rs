//! Clock abstraction.
//!
//! The facade is the only component that asks for "now"; the pure
//! modules receive explicit instants and dates. Injecting the clock
//! keeps every date-boundary case testable without sleeping.

use chrono::{DateTime, Utc};

use crate::dates::CalendarDate;

/// Source of the current instant and local calendar day.
pub trait Clock: Send + Sync {
    /// Current UTC instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day at the given offset from UTC (minutes east).
    fn today(&self, offset_minutes: i32) -> CalendarDate {
        CalendarDate::from_instant(self.now(), offset_minutes)
    }
}

/// Wall-clock implementation used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed-instant clock for tests; `advance` moves it forward.
#[derive(Debug)]
pub struct FixedClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock mutex poisoned") = now;
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.now.lock().expect("clock mutex poisoned");
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap());
        let before = clock.now();
        clock.advance(Duration::days(2));
        assert_eq!(clock.now() - before, Duration::days(2));
    }

    #[test]
    fn test_today_applies_offset() {
        let clock = FixedClock::at(Utc.with_ymd_and_hms(2025, 3, 9, 23, 30, 0).unwrap());
        assert_eq!(clock.today(0).key(), "2025-03-09");
        assert_eq!(clock.today(540).key(), "2025-03-10");
    }
}
