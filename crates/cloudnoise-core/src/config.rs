use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};
use crate::random_field::RandomSource;

/// Generation parameters. Missing JSON fields fall back to [`NoiseConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Columns in the generated grid.
    pub width: usize,
    /// Rows in the generated grid.
    pub height: usize,
    /// Number of smoothed layers blended together.
    pub octaves: u32,
    /// Fixed seed; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { width: 512, height: 512, octaves: 5, seed: None }
    }
}

impl NoiseConfig {
    pub fn new(width: usize, height: usize, octaves: u32) -> Self {
        Self { width, height, octaves, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| NoiseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidDimension { width: self.width, height: self.height });
        }
        if self.octaves == 0 || self.octaves > usize::BITS {
            return Err(NoiseError::InvalidOctaveCount(self.octaves));
        }
        Ok(())
    }

    /// The random source for this run: the fixed seed if set, else the clock.
    pub fn random_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_time(),
        }
    }
}
