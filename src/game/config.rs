use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::WorldError;
use super::grid::Grid;

/// Parameters for constructing a [`World`](super::World)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width (and height) of the square grid
    pub width: usize,
    /// Cell index of the snake's head at start
    pub start_index: usize,
    /// Initial length of the snake
    pub start_length: usize,
    /// Seed for reward placement
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 8,
            start_index: 27,
            start_length: 3,
            seed: 0x5eed,
        }
    }
}

impl WorldConfig {
    /// Create a configuration with a custom grid, head centered
    pub fn new(width: usize) -> Self {
        let center = width / 2;
        Self {
            width,
            start_index: center * width + center,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(4)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(24)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the grid, start cell and length
    pub fn validate(&self) -> Result<(), WorldError> {
        let grid = Grid::new(self.width)?;

        if !grid.contains(self.start_index) {
            return Err(WorldError::StartOutOfRange {
                index: self.start_index,
                size: grid.size(),
            });
        }

        // Longer snakes are shortened to fit when laid out
        if self.start_length == 0 {
            return Err(WorldError::ZeroLength);
        }

        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate().context("Invalid world configuration")?;
        Ok(config)
    }
}
