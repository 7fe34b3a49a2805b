//! Pipeline orchestrator: runs all generation stages in order.

use log::{debug, info};

use crate::command::ColourGrid;
use crate::config::NoiseConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::noise::blend;
use crate::random_field::{self, RandomSource};

/// Full output of the generation pipeline.
#[derive(Debug)]
pub struct CloudResult {
    /// Seed the white noise was drawn from.
    pub seed: u64,
    /// Normalized blended noise, values in `[0, 1]`.
    pub noise: Grid<f32>,
    /// Tone-mapped colours; the buffer later commands mutate.
    pub colours: ColourGrid,
}

/// The main pipeline orchestrator.
pub struct CloudGenerator;

impl CloudGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Run the pipeline with the random source described by `config`.
    pub fn generate(&self, config: &NoiseConfig) -> Result<CloudResult> {
        config.validate()?;
        let mut source = config.random_source();
        self.generate_with(config, &mut source)
    }

    /// Run the pipeline drawing white noise from `source`.
    ///
    /// Pipeline order:
    ///   1. White noise
    ///   2. Octave smoothing and blending
    ///   3. Tone mapping
    pub fn generate_with(&self, config: &NoiseConfig, source: &mut RandomSource) -> Result<CloudResult> {
        config.validate()?;
        info!(
            "generating {}×{} noise, {} octaves, seed {}",
            config.width,
            config.height,
            config.octaves,
            source.seed()
        );

        // ── 1. White noise ──────────────────────────────────────────────────
        let white = random_field::generate(config.width, config.height, source)?;

        // ── 2. Octave blend ─────────────────────────────────────────────────
        let noise = blend(&white, config.octaves)?;
        debug!("blended range [{:.4}, {:.4}]", noise.min_value(), noise.max_value());

        // ── 3. Tone mapping ─────────────────────────────────────────────────
        let colours = ColourGrid::from_noise(&noise);

        Ok(CloudResult { seed: source.seed(), noise, colours })
    }
}

impl Default for CloudGenerator {
    fn default() -> Self {
        Self::new()
    }
}
