//! Game settings.
//!
//! Settings can be loaded from a JSON file; any field left out of the
//! file falls back to the standard rules below.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable game settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cash each player starts with.
    pub starting_balance: i64,
    /// Credit for completing a lap past the start slot.
    pub start_bonus: i64,
    /// Display names for the two seats, in turn order.
    pub player_names: [String; 2],
    /// Random seed; 0 draws the seed from entropy.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_balance: 10_000,
            start_bonus: 1_000,
            player_names: ["P1".to_string(), "P2".to_string()],
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Loads settings from a JSON file at the given path.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
