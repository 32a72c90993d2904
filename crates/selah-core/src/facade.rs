//! Engagement facade.
//!
//! The one component allowed to touch the store and the clock. Each
//! operation is a single read-modify-write of one state object:
//! load, run the pure mutation, persist the result wholesale. A
//! failed save surfaces as [`EngineError::Store`] with nothing
//! partially committed; nothing is retried here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::{self, ActivityEntry, WeeklySummary};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::content::{ContentContext, ContentGenerator, ContentKind, GeneratedContent};
use crate::dates::CalendarDate;
use crate::error::{EngineError, Result};
use crate::plan::{PlanPhase, PlanProgress};
use crate::store::{self, Store};
use crate::streak::{EngagementOutcome, StreakState};
use crate::unlock::ScheduledUnlock;

/// Streak state as reported to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_engaged_days: u32,
    pub milestones_reached: Vec<u32>,
    pub engaged_today: bool,
    /// Milestones crossed by the call that produced this summary.
    pub new_milestones: Vec<u32>,
    /// Celebration line attached when a milestone lands.
    pub encouragement: Option<GeneratedContent>,
}

/// Plan progress as reported to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub plan_id: String,
    pub total_days: u32,
    pub current_day: u32,
    pub completed_days: Vec<u32>,
    pub is_completed: bool,
    pub phase: PlanPhase,
}

/// A sealed letter as reported to the UI (payload withheld while
/// locked).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedSummary {
    pub id: Uuid,
    pub unlocks_at: Option<chrono::DateTime<chrono::Utc>>,
    pub days_remaining: i64,
    pub opened: bool,
}

impl PlanSummary {
    fn from_progress(progress: &PlanProgress) -> Self {
        Self {
            plan_id: progress.plan_id.clone(),
            total_days: progress.total_days,
            current_day: progress.current_day,
            completed_days: progress.completed_days.iter().copied().collect(),
            is_completed: progress.is_completed,
            phase: progress.phase(),
        }
    }
}

/// Composition root over store, clock, generator and config.
///
/// Constructed once per session and passed by reference; there is no
/// process-wide singleton.
pub struct EngagementFacade {
    store: Box<dyn Store>,
    clock: Arc<dyn Clock>,
    generator: Box<dyn ContentGenerator>,
    config: EngineConfig,
}

impl EngagementFacade {
    pub fn new(
        store: Box<dyn Store>,
        clock: Arc<dyn Clock>,
        generator: Box<dyn ContentGenerator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            clock,
            generator,
            config,
        }
    }

    fn today(&self) -> CalendarDate {
        self.clock.today(self.config.timezone_offset_minutes)
    }

    // ── Streak ───────────────────────────────────────────────────────

    /// Count today as engaged. Idempotent within a calendar day.
    pub fn record_engagement_today(&mut self) -> Result<StreakSummary> {
        let today = self.today();
        let mut state: StreakState =
            store::load_json(self.store.as_ref(), store::STREAK_KEY)?.unwrap_or_default();

        let outcome = state.record_engagement(today, &self.config.milestone_ladder);

        let new_milestones = match &outcome {
            EngagementOutcome::Counted { new_milestones } => {
                store::save_json(self.store.as_mut(), store::STREAK_KEY, &state)?;
                new_milestones.clone()
            }
            EngagementOutcome::AlreadyCounted => Vec::new(),
            EngagementOutcome::StaleDate => {
                // Out-of-order call or clock skew; state left alone.
                tracing::warn!(date = %today, "engagement date precedes last recorded date");
                Vec::new()
            }
        };

        let encouragement = new_milestones.first().map(|_| {
            self.generator.generate(
                ContentKind::Encouragement,
                &ContentContext {
                    streak: Some(state.current_streak),
                    ..Default::default()
                },
            )
        });

        Ok(self.summarize_streak(&state, today, new_milestones, encouragement))
    }

    /// Current streak state without mutating anything.
    pub fn current_streak_summary(&self) -> Result<StreakSummary> {
        let state: StreakState =
            store::load_json(self.store.as_ref(), store::STREAK_KEY)?.unwrap_or_default();
        let today = self.today();
        Ok(self.summarize_streak(&state, today, Vec::new(), None))
    }

    fn summarize_streak(
        &self,
        state: &StreakState,
        today: CalendarDate,
        new_milestones: Vec<u32>,
        encouragement: Option<GeneratedContent>,
    ) -> StreakSummary {
        StreakSummary {
            current_streak: state.current_streak,
            longest_streak: state.longest_streak,
            total_engaged_days: state.total_engaged_days,
            milestones_reached: state.milestones_reached.iter().copied().collect(),
            engaged_today: state.last_engaged == Some(today),
            new_milestones,
            encouragement,
        }
    }

    // ── Plans ────────────────────────────────────────────────────────

    /// Begin an N-day plan. Refuses to silently reset existing
    /// progress for the same plan id.
    pub fn start_plan(&mut self, plan_id: &str, total_days: u32) -> Result<PlanSummary> {
        let key = store::plan_key(plan_id);
        if store::load_json::<PlanProgress>(self.store.as_ref(), &key)?.is_some() {
            return Err(EngineError::AlreadyStarted {
                plan_id: plan_id.to_string(),
            });
        }
        let progress = PlanProgress::start(plan_id, total_days)?;
        store::save_json(self.store.as_mut(), &key, &progress)?;
        Ok(PlanSummary::from_progress(&progress))
    }

    /// Mark one day of a plan complete. Idempotent per day.
    pub fn complete_day(&mut self, plan_id: &str, day: u32) -> Result<PlanSummary> {
        let key = store::plan_key(plan_id);
        let mut progress: PlanProgress = store::load_json(self.store.as_ref(), &key)?
            .ok_or_else(|| EngineError::NotFound { key: key.clone() })?;
        progress.complete_day(day)?;
        store::save_json(self.store.as_mut(), &key, &progress)?;
        Ok(PlanSummary::from_progress(&progress))
    }

    pub fn plan_summary(&self, plan_id: &str) -> Result<PlanSummary> {
        let key = store::plan_key(plan_id);
        let progress: PlanProgress = store::load_json(self.store.as_ref(), &key)?
            .ok_or_else(|| EngineError::NotFound { key })?;
        Ok(PlanSummary::from_progress(&progress))
    }

    pub fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let mut summaries = Vec::new();
        for key in self.store.keys_with_prefix(store::PLAN_PREFIX)? {
            if let Some(progress) = store::load_json::<PlanProgress>(self.store.as_ref(), &key)? {
                summaries.push(PlanSummary::from_progress(&progress));
            }
        }
        Ok(summaries)
    }

    /// Devotional content for one plan day, from the injected
    /// generator. Never fails; the generator degrades to templates.
    pub fn plan_day_content(&self, plan_id: &str, day: u32) -> GeneratedContent {
        self.generator.generate(
            ContentKind::PlanDay,
            &ContentContext {
                plan_id: Some(plan_id.to_string()),
                day: Some(day),
                ..Default::default()
            },
        )
    }

    // ── Sealed letters ───────────────────────────────────────────────

    /// Seal text for `delay_days` days from now; returns the new id.
    pub fn seal_content(&mut self, payload: String, delay_days: i64) -> Result<Uuid> {
        let sealed =
            ScheduledUnlock::seal(payload, chrono::Duration::days(delay_days), self.clock.now());
        let id = sealed.id;
        store::save_json(self.store.as_mut(), &store::sealed_key(&id), &sealed)?;
        Ok(id)
    }

    /// Open a sealed letter. While locked, [`EngineError::Locked`] is
    /// the normal outcome and carries the unlock instant for display.
    pub fn try_open_sealed(&mut self, id: &Uuid) -> Result<String> {
        let key = store::sealed_key(id);
        let mut sealed: ScheduledUnlock<String> = store::load_json(self.store.as_ref(), &key)?
            .ok_or_else(|| EngineError::NotFound { key: key.clone() })?;
        let payload = sealed.try_open(self.clock.now())?.clone();
        // Persist the recorded first open so it survives restarts.
        store::save_json(self.store.as_mut(), &key, &sealed)?;
        Ok(payload)
    }

    pub fn list_sealed(&self) -> Result<Vec<SealedSummary>> {
        let now = self.clock.now();
        let mut summaries = Vec::new();
        for key in self.store.keys_with_prefix(store::SEALED_PREFIX)? {
            if let Some(sealed) =
                store::load_json::<ScheduledUnlock<String>>(self.store.as_ref(), &key)?
            {
                summaries.push(SealedSummary {
                    id: sealed.id,
                    unlocks_at: sealed.unlock_at,
                    days_remaining: sealed.days_remaining(now),
                    opened: sealed.first_opened_at.is_some(),
                });
            }
        }
        Ok(summaries)
    }

    // ── Activity ─────────────────────────────────────────────────────

    /// Append an activity entry under today's date and apply the
    /// configured retention cap.
    pub fn log_activity(&mut self, duration_minutes: u32, tag: &str) -> Result<()> {
        let mut log: Vec<ActivityEntry> =
            store::load_json(self.store.as_ref(), store::ACTIVITY_LOG_KEY)?.unwrap_or_default();
        log.push(ActivityEntry {
            date: self.today(),
            duration_minutes,
            tag: tag.to_string(),
        });
        activity::trim(&mut log, self.config.activity_retention);
        store::save_json(self.store.as_mut(), store::ACTIVITY_LOG_KEY, &log)?;
        Ok(())
    }

    /// Seven Sun..Sat buckets for the week containing `reference`
    /// (today when `None`).
    pub fn weekly_summary(&self, reference: Option<CalendarDate>) -> Result<WeeklySummary> {
        let log: Vec<ActivityEntry> =
            store::load_json(self.store.as_ref(), store::ACTIVITY_LOG_KEY)?.unwrap_or_default();
        let reference = reference.unwrap_or_else(|| self.today());
        Ok(activity::weekly_buckets(&log, reference))
    }
}
