//! Error types for selah-core.
//!
//! Two tiers: [`StoreError`] for backend I/O failures, and
//! [`EngineError`] for everything the facade can surface. `Locked` is
//! an expected, user-facing outcome (show the remaining wait), not a
//! fault; `AlreadyStarted` and `InvalidDay` are caller bugs.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Engine-level error type.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A progress record already exists for this plan; starting again
    /// would silently reset it.
    #[error("plan '{plan_id}' already has progress; delete it before restarting")]
    AlreadyStarted { plan_id: String },

    /// Day index outside the plan's `[1, total_days]` range.
    #[error("day {day} is out of range for a {total_days}-day plan")]
    InvalidDay { day: u32, total_days: u32 },

    /// A plan must contain at least one day.
    #[error("a plan needs at least one day, got {total_days}")]
    InvalidPlanLength { total_days: u32 },

    /// Content is still sealed. Normal control flow: callers display
    /// the remaining wait rather than treating this as a failure.
    #[error("content is sealed until {unlocks_at}")]
    Locked { unlocks_at: DateTime<Utc> },

    /// An engagement was recorded with a date earlier than the last
    /// recorded one. Treated as a no-op by the streak tracker.
    #[error("engagement date precedes last recorded date")]
    StaleDate,

    /// No record found under the given key.
    #[error("no record found for '{key}'")]
    NotFound { key: String },

    /// Backend I/O failure. In-memory state is left untouched.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization of persisted state failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Storage-backend errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("failed to open store at {path}: {source}")]
    OpenFailed {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read or write against the backend failed
    #[error("store query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("store migration failed: {0}")]
    MigrationFailed(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
