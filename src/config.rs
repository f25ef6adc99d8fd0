//! Runtime settings
//!
//! Small, optional knobs for the host loop: tick pacing, star count, and
//! a pinned RNG seed for reproducible runs. Loaded from a JSON file when
//! one is given on the command line, defaulted otherwise. Gameplay
//! difficulty is not configurable; the year table is built in.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::AssetError;
use crate::consts::TIC_TIMEOUT_MS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bad sprite asset: {0}")]
    Asset(#[from] AssetError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wall-clock milliseconds between scheduler ticks.
    pub tic_timeout_ms: u64,
    /// Stars scattered over the field at startup.
    pub star_count: usize,
    /// Pinned RNG seed; a fresh one is drawn from the clock when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tic_timeout_ms: TIC_TIMEOUT_MS,
            star_count: 100,
            seed: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
