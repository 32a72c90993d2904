//! Time-locked content.
//!
//! A [`ScheduledUnlock`] wraps an opaque payload that only becomes
//! readable at or after a stored instant. It serves the sealed-letter
//! feature and any future time-gated content; plan-day gating composes
//! this per day rather than reimplementing the check.
//!
//! This is the one place in the engine where instants are compared
//! directly -- sub-day precision is meaningful at the unlock boundary.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// A payload gated behind a future instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledUnlock<T> {
    pub id: Uuid,
    payload: T,
    /// `None` means unlocked immediately.
    pub unlock_at: Option<DateTime<Utc>>,
    /// Set on the first successful open; once set, the content never
    /// reads as locked again, even if the clock later moves backwards.
    pub first_opened_at: Option<DateTime<Utc>>,
}

impl<T> ScheduledUnlock<T> {
    /// Seal a payload for `delay` from `now`. A zero or negative
    /// delay produces an immediately open item.
    pub fn seal(payload: T, delay: Duration, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
            unlock_at: (delay > Duration::zero()).then(|| now + delay),
            first_opened_at: None,
        }
    }

    pub fn is_unlocked(&self, now: DateTime<Utc>) -> bool {
        self.first_opened_at.is_some() || self.unlock_at.map_or(true, |at| now >= at)
    }

    /// Attempt to read the payload. On the first success the open is
    /// recorded; while locked, returns [`EngineError::Locked`] with
    /// the unlock instant for display.
    pub fn try_open(&mut self, now: DateTime<Utc>) -> Result<&T, EngineError> {
        if self.is_unlocked(now) {
            self.first_opened_at.get_or_insert(now);
            Ok(&self.payload)
        } else {
            Err(EngineError::Locked {
                unlocks_at: self.unlock_at.unwrap_or(now),
            })
        }
    }

    /// Whole days until unlock, rounded up, so a letter sealed for 30
    /// days never displays "0 days left" while still locked. Zero once
    /// unlocked.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        if self.is_unlocked(now) {
            return 0;
        }
        let Some(at) = self.unlock_at else { return 0 };
        let wait = at - now;
        let days = wait.num_days();
        if wait > Duration::days(days) {
            days + 1
        } else {
            days
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_delay_is_open_immediately() {
        let mut sealed = ScheduledUnlock::seal("hello", Duration::zero(), t0());
        assert!(sealed.unlock_at.is_none());
        assert_eq!(sealed.try_open(t0()).ok(), Some(&"hello"));
    }

    #[test]
    fn test_locked_until_exact_boundary() {
        let mut sealed = ScheduledUnlock::seal("letter", Duration::days(7), t0());
        let unlock_at = t0() + Duration::days(7);

        // One millisecond early: still locked.
        let err = sealed.try_open(unlock_at - Duration::milliseconds(1)).unwrap_err();
        match err {
            EngineError::Locked { unlocks_at } => assert_eq!(unlocks_at, unlock_at),
            other => panic!("expected Locked, got {other:?}"),
        }

        // At the boundary: open.
        assert_eq!(sealed.try_open(unlock_at).ok(), Some(&"letter"));
        assert_eq!(sealed.first_opened_at, Some(unlock_at));
    }

    #[test]
    fn test_never_relocks_after_first_open() {
        let mut sealed = ScheduledUnlock::seal("letter", Duration::days(1), t0());
        let unlock_at = t0() + Duration::days(1);
        sealed.try_open(unlock_at).unwrap();

        // Clock skew moves "now" before the unlock instant: still open,
        // and the original open timestamp is preserved.
        assert_eq!(sealed.try_open(t0()).ok(), Some(&"letter"));
        assert_eq!(sealed.first_opened_at, Some(unlock_at));
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        let sealed = ScheduledUnlock::seal("letter", Duration::days(30), t0());

        assert_eq!(sealed.days_remaining(t0()), 30);
        // 29 days 1 hour left still reads as 30 days.
        assert_eq!(sealed.days_remaining(t0() + Duration::hours(23)), 30);
        // One hour left is still "1 day", never "0 days".
        assert_eq!(
            sealed.days_remaining(t0() + Duration::days(29) + Duration::hours(23)),
            1
        );
        assert_eq!(sealed.days_remaining(t0() + Duration::days(30)), 0);
    }

    #[test]
    fn test_repeat_open_is_idempotent() {
        let mut sealed = ScheduledUnlock::seal(42u32, Duration::zero(), t0());
        sealed.try_open(t0()).unwrap();
        let first = sealed.first_opened_at;
        sealed.try_open(t0() + Duration::days(3)).unwrap();
        assert_eq!(sealed.first_opened_at, first);
    }
}
