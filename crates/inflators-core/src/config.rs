//! Simulation configuration.
//!
//! Everything here is optional in the JSON form; missing fields fall back
//! to the classic 30x40 arcade layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_HEIGHT, GRID_WIDTH, STARTING_LIVES};
use crate::error::ConfigError;
use crate::types::Grid;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same game.
    pub seed: u64,
    pub grid_width: i32,
    pub grid_height: i32,
    pub starting_lives: u32,
    pub starting_round: u32,
    /// When false, the world never spawns aliens or stars on its own and
    /// only runs what the caller places with the `spawn_*` methods.
    pub auto_spawn: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            starting_lives: STARTING_LIVES,
            starting_round: 1,
            auto_spawn: true,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 3 {
            return Err(ConfigError::Invalid {
                field: "grid_width",
                reason: format!("must be at least 3, got {}", self.grid_width),
            });
        }
        if self.grid_height < 3 {
            return Err(ConfigError::Invalid {
                field: "grid_height",
                reason: format!("must be at least 3, got {}", self.grid_height),
            });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1".into(),
            });
        }
        if self.starting_round == 0 {
            return Err(ConfigError::Invalid {
                field: "starting_round",
                reason: "rounds are numbered from 1".into(),
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}
