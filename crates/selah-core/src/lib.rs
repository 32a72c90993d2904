//! # Selah Core Library
//!
//! Core temporal-tracking logic for Selah: prayer streaks, multi-day
//! plan progress, time-sealed letters, and weekly activity stats.
//! The CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Pure modules** (`dates`, `streak`, `plan`, `unlock`,
//!   `activity`): no I/O, no clock access, testable with explicit
//!   values
//! - **Store**: a narrow key-value contract with SQLite and in-memory
//!   backends, so temporal logic cannot drift between them
//! - **Facade**: the single read-modify-write composition layer; the
//!   only component that performs I/O or reads the clock
//!
//! All day-level comparison goes through [`CalendarDate`] keys;
//! instant comparison is reserved for the unlock primitive.
//!
//! ## Key Components
//!
//! - [`StreakState`]: consecutive-day engagement tracking
//! - [`PlanProgress`]: N-day ordered plan state machine
//! - [`ScheduledUnlock`]: time-locked content primitive
//! - [`EngagementFacade`]: the operations the UI calls

pub mod activity;
pub mod clock;
pub mod config;
pub mod content;
pub mod dates;
pub mod error;
pub mod facade;
pub mod plan;
pub mod store;
pub mod streak;
pub mod unlock;

pub use activity::{ActivityEntry, DayBucket, WeeklySummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use content::{ContentContext, ContentGenerator, ContentKind, GeneratedContent, TemplateGenerator};
pub use dates::CalendarDate;
pub use error::{EngineError, Result, StoreError};
pub use facade::{EngagementFacade, PlanSummary, SealedSummary, StreakSummary};
pub use plan::{PlanPhase, PlanProgress};
pub use store::{MemoryStore, SqliteStore, Store};
pub use streak::{EngagementOutcome, StreakState, MILESTONE_LADDER};
pub use unlock::ScheduledUnlock;
