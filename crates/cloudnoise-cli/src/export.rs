//! PNG export of the colour grid.

use std::path::Path;

use anyhow::{Context, Result};
use cloudnoise_core::ColourGrid;
use image::{imageops, ImageFormat, Rgb, RgbImage};
use log::info;

/// Render the grid to an RGB image, flipped vertically so row 0 lands at the bottom.
pub fn to_image(grid: &ColourGrid) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (r, row) in grid.rows().enumerate() {
        for (c, colour) in row.iter().enumerate() {
            img.put_pixel(c as u32, r as u32, Rgb(colour.to_array()));
        }
    }
    imageops::flip_vertical_in_place(&mut img);
    img
}

/// Encode the grid as a PNG at `path`.
pub fn save_png(grid: &ColourGrid, path: &Path) -> Result<()> {
    to_image(grid)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to save {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
