pub mod activity;
pub mod config;
pub mod letter;
pub mod plan;
pub mod streak;

use std::sync::Arc;

use selah_core::{EngagementFacade, EngineConfig, SqliteStore, SystemClock, TemplateGenerator};

/// Build a facade over the on-disk store with the saved config.
pub fn open_facade() -> Result<EngagementFacade, Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let config = EngineConfig::load()?;
    Ok(EngagementFacade::new(
        Box::new(store),
        Arc::new(SystemClock),
        Box::new(TemplateGenerator),
        config,
    ))
}
