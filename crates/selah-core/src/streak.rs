//! Daily engagement streak tracking.
//!
//! A streak counts consecutive calendar days with at least one
//! qualifying engagement. Continuity is exactly one rule: engaging
//! the day after the last engagement extends the streak, anything
//! else (a gap of two or more days) resets it to 1. There is no
//! grace period.
//!
//! Milestones are achievements, not status: once a streak length on
//! the ladder is reached it stays recorded even if the streak later
//! resets below it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dates::CalendarDate;

/// Default milestone ladder, in days.
pub const MILESTONE_LADDER: [u32; 7] = [7, 14, 30, 60, 90, 180, 365];

/// Persistent streak state for a user.
///
/// Serialized wholesale to the store under the `streak` key; all
/// date comparison happens on [`CalendarDate`] keys, never instants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Length of the current run of consecutive days.
    pub current_streak: u32,
    /// Longest run ever achieved. Never decreases.
    pub longest_streak: u32,
    /// Last day an engagement was counted, if any.
    pub last_engaged: Option<CalendarDate>,
    /// Total distinct days with an engagement. Never decreases.
    pub total_engaged_days: u32,
    /// Milestone lengths reached so far. Grows monotonically.
    pub milestones_reached: BTreeSet<u32>,
}

/// What a `record_engagement` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum EngagementOutcome {
    /// First engagement of the day; the streak advanced or reset.
    Counted {
        /// Milestones newly crossed by this engagement, if any.
        new_milestones: Vec<u32>,
    },
    /// Already engaged today; state unchanged.
    AlreadyCounted,
    /// The supplied date precedes `last_engaged`; state unchanged.
    /// Indicates a caller bug (out-of-order call or clock skew).
    StaleDate,
}

impl StreakState {
    /// Record an engagement for `today` against the given milestone
    /// ladder. Idempotent within a day: the second call on the same
    /// date is a no-op.
    pub fn record_engagement(&mut self, today: CalendarDate, ladder: &[u32]) -> EngagementOutcome {
        match self.last_engaged {
            Some(last) if last == today => return EngagementOutcome::AlreadyCounted,
            Some(last) if today < last => return EngagementOutcome::StaleDate,
            Some(last) if today.days_between(&last) == 1 => {
                self.current_streak += 1;
            }
            // Gap of two or more days, or first engagement ever.
            _ => {
                self.current_streak = 1;
            }
        }

        self.total_engaged_days += 1;
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_engaged = Some(today);

        let mut new_milestones = Vec::new();
        for &m in ladder {
            if self.current_streak >= m && self.milestones_reached.insert(m) {
                new_milestones.push(m);
            }
        }

        EngagementOutcome::Counted { new_milestones }
    }
}
