//! Single-octave smoothing of a white-noise field.
//!
//! Anchors sit every `2^octave` cells; every cell between them is a bilinear,
//! cosine-eased blend of the four surrounding anchors. Anchors past the edge
//! wrap around, so the layer tiles.
//!
//! The row anchor wraps modulo the grid *width* and the column anchor modulo
//! the grid *height*. On square grids this is ordinary toroidal wrap; on
//! non-square grids it shifts where the wrap happens, and the resulting index is
//! then folded into the real axis length so it stays in bounds.
use log::debug;

use super::interpolate::interpolate;
use crate::error::{NoiseError, Result};
use crate::grid::Grid;

/// Anchor spacing for `octave`, or `InvalidOctaveCount` if `2^octave` does not fit in `usize`.
pub fn sample_period(octave: u32) -> Result<usize> {
    1usize.checked_shl(octave).ok_or(NoiseError::InvalidOctaveCount(octave))
}

/// Smooth `base` at the given octave. The result has the same dimensions as `base`.
pub fn smooth(base: &Grid<f32>, octave: u32) -> Result<Grid<f32>> {
    let period = sample_period(octave)?;
    let frequency = 1.0 / period as f32;
    let width = base.width();
    let height = base.height();
    debug!("smoothing octave {octave} (period {period}) over {width}×{height}");

    Grid::from_fn(width, height, |row, col| {
        // Horizontal sampling indices.
        let i0 = (row / period) * period;
        let i1 = wrap(i0 + period, width, height);
        let h_blend = (row - i0) as f32 * frequency;

        // Vertical sampling indices.
        let j0 = (col / period) * period;
        let j1 = wrap(j0 + period, height, width);
        let v_blend = (col - j0) as f32 * frequency;

        let top = interpolate(*base.get(i0, j0), *base.get(i1, j0), h_blend);
        let bottom = interpolate(*base.get(i0, j1), *base.get(i1, j1), h_blend);
        interpolate(top, bottom, v_blend)
    })
}

/// Wrap `index` modulo `wrap_len`, then fold it into `0..axis_len`.
#[inline]
fn wrap(index: usize, wrap_len: usize, axis_len: usize) -> usize {
    index % wrap_len % axis_len
}
