//! Activity log aggregation.
//!
//! The log is append-only: timestamped, duration-bearing entries
//! (prayer minutes, plan reflections) that get bucketed into a fixed
//! Sun..Saturday window for the weekly chart. Every bucket is always
//! present -- the chart needs exactly seven fixed-position bars, days
//! with no entries report zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dates::CalendarDate;

/// One logged activity. Never mutated or deleted by the engine;
/// retention trimming is a store policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: CalendarDate,
    pub duration_minutes: u32,
    pub tag: String,
}

/// One day's bar in the weekly chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// "Sun".."Sat"
    pub day_label: String,
    pub date_key: String,
    pub total_minutes: u32,
}

/// Seven fixed-position buckets plus the week total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: CalendarDate,
    pub buckets: Vec<DayBucket>,
    pub total_minutes: u32,
}

/// Bucket `entries` into the week containing `reference`, Sun..Sat.
pub fn weekly_buckets(entries: &[ActivityEntry], reference: CalendarDate) -> WeeklySummary {
    let week_start = reference.start_of_week();

    let mut by_key: HashMap<String, u32> = HashMap::new();
    for entry in entries {
        *by_key.entry(entry.date.key()).or_insert(0) += entry.duration_minutes;
    }

    let buckets: Vec<DayBucket> = (0..7)
        .map(|offset| {
            let day = week_start.add_days(offset);
            let key = day.key();
            DayBucket {
                day_label: day.day_label().to_string(),
                total_minutes: by_key.get(&key).copied().unwrap_or(0),
                date_key: key,
            }
        })
        .collect();

    let total_minutes = buckets.iter().map(|b| b.total_minutes).sum();

    WeeklySummary {
        week_start,
        buckets,
        total_minutes,
    }
}

/// Week total without the per-day breakdown.
pub fn total_weekly_minutes(entries: &[ActivityEntry], reference: CalendarDate) -> u32 {
    weekly_buckets(entries, reference).total_minutes
}

/// Keep only the most recent `keep` entries (by position -- the log
/// is append-only, so position order is time order).
pub fn trim(entries: &mut Vec<ActivityEntry>, keep: usize) {
    if entries.len() > keep {
        let excess = entries.len() - keep;
        entries.drain(..excess);
    }
}
