//! Persistence abstraction.
//!
//! The engine talks to one narrow key-value contract; the two
//! backends (SQLite on disk, in-memory) implement it identically, so
//! the temporal logic cannot drift between them. Values are whole
//! state objects serialized as JSON -- a failed save can never leave
//! a half-written record.
//!
//! Key layout:
//! - `streak` -- the single [`crate::streak::StreakState`]
//! - `plan/<plan_id>` -- one [`crate::plan::PlanProgress`] each
//! - `sealed/<uuid>` -- one sealed letter each
//! - `activity_log` -- the append-only activity entry list

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

use crate::error::{EngineError, StoreError};

pub const STREAK_KEY: &str = "streak";
pub const ACTIVITY_LOG_KEY: &str = "activity_log";
pub const PLAN_PREFIX: &str = "plan/";
pub const SEALED_PREFIX: &str = "sealed/";

/// Minimal key-value contract every backend satisfies.
pub trait Store: Send {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
    /// All stored keys beginning with `prefix`, in lexicographic order.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

/// Load and deserialize a state object, `None` when absent.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Option<T>, EngineError> {
    match store.load_raw(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and persist a state object wholesale.
pub fn save_json<T: Serialize>(
    store: &mut dyn Store,
    key: &str,
    value: &T,
) -> Result<(), EngineError> {
    let raw = serde_json::to_string(value)?;
    store.save_raw(key, &raw)?;
    Ok(())
}

/// Returns `~/.config/selah[-dev]/` based on SELAH_ENV.
///
/// Set SELAH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SELAH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("selah-dev")
    } else {
        base_dir.join("selah")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Store key for a plan's progress record.
pub fn plan_key(plan_id: &str) -> String {
    format!("{PLAN_PREFIX}{plan_id}")
}

/// Store key for a sealed letter.
pub fn sealed_key(id: &uuid::Uuid) -> String {
    format!("{SEALED_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Contract exercised against every backend so their semantics
    // cannot drift apart.
    fn exercise_store_contract(store: &mut dyn Store) {
        assert_eq!(store.load_raw("absent").unwrap(), None);

        store.save_raw("plan/alpha", "{}").unwrap();
        store.save_raw("plan/žalm", "{}").unwrap();
        store.save_raw("sealed/x", "{}").unwrap();

        assert_eq!(store.load_raw("plan/alpha").unwrap(), Some("{}".to_string()));
        assert_eq!(
            store.keys_with_prefix("plan/").unwrap(),
            vec!["plan/alpha".to_string(), "plan/žalm".to_string()]
        );

        store.delete("plan/alpha").unwrap();
        assert_eq!(
            store.keys_with_prefix("plan/").unwrap(),
            vec!["plan/žalm".to_string()]
        );
    }

    #[test]
    fn test_memory_store_contract() {
        exercise_store_contract(&mut MemoryStore::new());
    }

    #[test]
    fn test_sqlite_store_contract() {
        exercise_store_contract(&mut SqliteStore::open_memory().unwrap());
    }
}
