//! Octave accumulation.
//!
//! Layers are summed coarsest-first with amplitude `PERSISTENCE^n` and divided
//! by the total amplitude, so the result is a convex combination of the layers.
use log::debug;

use super::smooth::smooth;
use crate::error::{NoiseError, Result};
use crate::grid::Grid;

/// Per-octave amplitude decay.
pub const PERSISTENCE: f32 = 0.5;

/// Blend `octave_count` smoothed layers of `base` into one normalized field.
pub fn blend(base: &Grid<f32>, octave_count: u32) -> Result<Grid<f32>> {
    if octave_count == 0 || octave_count > usize::BITS {
        return Err(NoiseError::InvalidOctaveCount(octave_count));
    }

    let layers = smooth_layers(base, octave_count)?;

    let mut result = Grid::new(base.width(), base.height(), 0.0f32)?;
    let mut amplitude = 1.0f32;
    let mut total_amplitude = 0.0f32;

    // Coarsest octave first; it receives the largest weight.
    for (octave, layer) in layers.iter().enumerate().rev() {
        amplitude *= PERSISTENCE;
        total_amplitude += amplitude;
        debug!("accumulating octave {octave} at amplitude {amplitude}");
        for (acc, &v) in result.iter_mut().zip(layer.iter()) {
            *acc += v * amplitude;
        }
    }

    for v in result.iter_mut() {
        *v /= total_amplitude;
    }

    Ok(result)
}

#[cfg(not(feature = "threading"))]
fn smooth_layers(base: &Grid<f32>, octave_count: u32) -> Result<Vec<Grid<f32>>> {
    (0..octave_count).map(|k| smooth(base, k)).collect()
}

#[cfg(feature = "threading")]
fn smooth_layers(base: &Grid<f32>, octave_count: u32) -> Result<Vec<Grid<f32>>> {
    use rayon::prelude::*;
    (0..octave_count).into_par_iter().map(|k| smooth(base, k)).collect()
}
