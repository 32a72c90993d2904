//! End-to-end facade scenarios against both store backends.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use selah_core::{
    CalendarDate, EngagementFacade, EngineConfig, EngineError, FixedClock, MemoryStore,
    SqliteStore, TemplateGenerator,
};

fn noon(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn memory_facade(clock: Arc<FixedClock>) -> EngagementFacade {
    EngagementFacade::new(
        Box::new(MemoryStore::new()),
        clock,
        Box::new(TemplateGenerator),
        EngineConfig::default(),
    )
}

#[test]
fn week_of_engagement_with_logged_minutes() {
    // Mon 2025-03-10 through Wed, with 10 / 0 / 15 minutes logged.
    let clock = Arc::new(FixedClock::at(noon(2025, 3, 10)));
    let mut facade = memory_facade(clock.clone());

    facade.record_engagement_today().unwrap();
    facade.log_activity(10, "prayer").unwrap();

    clock.advance(Duration::days(1));
    facade.record_engagement_today().unwrap();

    clock.advance(Duration::days(1));
    let streak = facade.record_engagement_today().unwrap();
    facade.log_activity(15, "prayer").unwrap();

    assert_eq!(streak.current_streak, 3);

    let week = facade.weekly_summary(None).unwrap();
    let minutes: Vec<u32> = week.buckets.iter().map(|b| b.total_minutes).collect();
    assert_eq!(minutes, [0, 10, 0, 15, 0, 0, 0]);
    assert_eq!(week.buckets[0].day_label, "Sun");
    assert_eq!(week.buckets[6].day_label, "Sat");
}

#[test]
fn letter_sealed_seven_days_opens_on_day_seven() {
    let clock = Arc::new(FixedClock::at(noon(2025, 3, 10)));
    let mut facade = memory_facade(clock.clone());

    let id = facade.seal_content("dear future me".to_string(), 7).unwrap();

    // Days 0 through 6: locked, with the unlock instant reported.
    for day in 0..7 {
        clock.set(noon(2025, 3, 10) + Duration::days(day));
        match facade.try_open_sealed(&id) {
            Err(EngineError::Locked { unlocks_at }) => {
                assert_eq!(unlocks_at, noon(2025, 3, 10) + Duration::days(7));
            }
            other => panic!("expected Locked on day {day}, got {other:?}"),
        }
    }

    // Day 7 onward: open.
    clock.set(noon(2025, 3, 17));
    assert_eq!(facade.try_open_sealed(&id).unwrap(), "dear future me");
    clock.advance(Duration::days(30));
    assert_eq!(facade.try_open_sealed(&id).unwrap(), "dear future me");
}

#[test]
fn plan_day_completed_out_of_order_holds_cursor() {
    let clock = Arc::new(FixedClock::at(noon(2025, 3, 10)));
    let mut facade = memory_facade(clock);

    facade.start_plan("devotional-7", 7).unwrap();
    let summary = facade.complete_day("devotional-7", 3).unwrap();

    assert_eq!(summary.current_day, 1);
    assert_eq!(summary.completed_days, vec![3]);
    assert!(!summary.is_completed);
}

#[test]
fn weekly_summary_accepts_explicit_reference_date() {
    let clock = Arc::new(FixedClock::at(noon(2025, 3, 10)));
    let mut facade = memory_facade(clock);

    facade.log_activity(30, "prayer").unwrap();

    // Asking about a different week finds nothing.
    let other_week = facade
        .weekly_summary(CalendarDate::new(2025, 4, 1))
        .unwrap();
    assert_eq!(other_week.total_minutes, 0);
    assert_eq!(other_week.buckets.len(), 7);
}

#[test]
fn sqlite_backed_facade_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selah.db");
    let clock = Arc::new(FixedClock::at(noon(2025, 3, 10)));

    {
        let store = SqliteStore::open_at(&path).unwrap();
        let mut facade = EngagementFacade::new(
            Box::new(store),
            clock.clone(),
            Box::new(TemplateGenerator),
            EngineConfig::default(),
        );
        facade.record_engagement_today().unwrap();
        facade.start_plan("lent", 40).unwrap();
        facade.complete_day("lent", 1).unwrap();
    }

    // New session, same database.
    let store = SqliteStore::open_at(&path).unwrap();
    let facade = EngagementFacade::new(
        Box::new(store),
        clock,
        Box::new(TemplateGenerator),
        EngineConfig::default(),
    );
    let streak = facade.current_streak_summary().unwrap();
    assert_eq!(streak.current_streak, 1);
    assert!(streak.engaged_today);

    let plan = facade.plan_summary("lent").unwrap();
    assert_eq!(plan.current_day, 2);
    assert_eq!(plan.completed_days, vec![1]);
}
