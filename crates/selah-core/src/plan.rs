//! Ordered plan progress.
//!
//! One state machine tracks completion of an ordered sequence of N
//! days for any plan instance -- devotional plans and fasting
//! sessions are the same machine with different day payloads, which
//! stay opaque to this module.
//!
//! The cursor is defined, not incremented: `current_day` is always
//! the smallest day not yet completed (clamped to the last day once
//! everything is done). Completing days out of order records the
//! completion without moving the cursor past the contiguous front.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::EngineError;

/// Coarse lifecycle phase. A progress record only exists once a plan
/// has been started, so an existing record is in progress until every
/// day is complete; "not started" is the absence of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanPhase {
    InProgress,
    Completed,
}

/// Progress through an N-day plan instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProgress {
    pub plan_id: String,
    /// Number of days in the plan, at least 1.
    pub total_days: u32,
    /// Next day to work from: the smallest day not in
    /// `completed_days`, clamped to `total_days` when all complete.
    pub current_day: u32,
    pub completed_days: BTreeSet<u32>,
    pub is_completed: bool,
}

impl PlanProgress {
    /// Fresh progress record at day 1 with nothing completed.
    /// A plan needs at least one day.
    pub fn start(plan_id: impl Into<String>, total_days: u32) -> Result<Self, EngineError> {
        if total_days == 0 {
            return Err(EngineError::InvalidPlanLength { total_days });
        }
        Ok(Self {
            plan_id: plan_id.into(),
            total_days,
            current_day: 1,
            completed_days: BTreeSet::new(),
            is_completed: false,
        })
    }

    pub fn phase(&self) -> PlanPhase {
        if self.is_completed {
            PlanPhase::Completed
        } else {
            PlanPhase::InProgress
        }
    }

    /// Mark `day` complete. Idempotent per day; a duplicate event
    /// changes nothing. Fails only for a day outside `[1, total_days]`.
    pub fn complete_day(&mut self, day: u32) -> Result<(), EngineError> {
        if day < 1 || day > self.total_days {
            return Err(EngineError::InvalidDay {
                day,
                total_days: self.total_days,
            });
        }
        if self.completed_days.insert(day) {
            self.recompute_cursor();
        }
        Ok(())
    }

    fn recompute_cursor(&mut self) {
        self.is_completed = self.completed_days.len() as u32 == self.total_days;
        self.current_day = (1..=self.total_days)
            .find(|d| !self.completed_days.contains(d))
            .unwrap_or(self.total_days);
    }
}
