//! TOML-based engine configuration.
//!
//! Stored at `~/.config/selah/config.toml`. Every field has a serde
//! default so a partial (or absent) file still loads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::data_dir;

fn default_timezone_offset() -> i32 {
    0
}

fn default_ladder() -> Vec<u32> {
    crate::streak::MILESTONE_LADDER.to_vec()
}

fn default_retention() -> usize {
    1000
}

/// Engine configuration.
///
/// Serialized to/from TOML at `~/.config/selah/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// User's offset from UTC in minutes east (e.g. JST = 540).
    /// Calendar-day boundaries follow this offset.
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset_minutes: i32,
    /// Streak lengths recorded as milestones.
    #[serde(default = "default_ladder")]
    pub milestone_ladder: Vec<u32>,
    /// Most recent activity entries kept in the log.
    #[serde(default = "default_retention")]
    pub activity_retention: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone_offset_minutes: default_timezone_offset(),
            milestone_ladder: default_ladder(),
            activity_retention: default_retention(),
        }
    }
}

impl EngineConfig {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data dir; absent file yields defaults.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Persist to the data dir.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
