//! White-noise seeding.
//!
//! A [`RandomSource`] is seeded once and then threaded through generation, so a
//! run is reproducible from the seed it logs.
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NoiseError, Result};
use crate::grid::Grid;

/// Seeded PRNG used for every white-noise draw in a run.
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }

    /// Seed from the wall clock (nanoseconds since the Unix epoch).
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        info!("seeding random source from clock: {seed}");
        Self::from_seed(seed)
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next sample, uniform in `[0, 1)`.
    #[inline]
    pub fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Generate a `width × height` grid of independent uniform samples in `[0, 1)`.
pub fn generate(width: usize, height: usize, source: &mut RandomSource) -> Result<Grid<f32>> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimension { width, height });
    }
    debug!("white noise {width}×{height} (seed {})", source.seed());
    Grid::from_fn(width, height, |_, _| source.next_unit())
}
