//! Diagnostic visualizer: writes every stage of the pipeline as a PNG to data/debug/.
//! Not part of the main pipeline; no tests, no clippy target.

use std::fs;
use std::path::Path;

use cloudnoise_core::noise::{blend, smooth};
use cloudnoise_core::random_field::{generate, RandomSource};
use cloudnoise_core::tone::to_colour;
use cloudnoise_core::{ColourGrid, Command, Grid};

const W: usize = 256;
const H: usize = 256;
const OCTAVES: u32 = 5;
const SEED: u64 = 42;

// ── Image helpers ─────────────────────────────────────────────────────────────

/// Scalar field → greyscale image, row 0 at the top.
fn field_image(field: &Grid<f32>) -> image::RgbImage {
    let mut img = image::RgbImage::new(field.width() as u32, field.height() as u32);
    for r in 0..field.height() {
        for c in 0..field.width() {
            img.put_pixel(c as u32, r as u32, image::Rgb(to_colour(*field.get(r, c)).to_array()));
        }
    }
    img
}

fn colour_image(grid: &ColourGrid) -> image::RgbImage {
    let mut img = image::RgbImage::new(grid.width() as u32, grid.height() as u32);
    for r in 0..grid.height() {
        for c in 0..grid.width() {
            img.put_pixel(c as u32, r as u32, image::Rgb(grid.get(r, c).to_array()));
        }
    }
    img
}

fn write(img: &image::RgbImage, out_dir: &Path, name: &str) {
    let path = out_dir.join(name);
    img.save(&path).unwrap_or_else(|e| panic!("failed to save {name}: {e}"));
    println!("Wrote {}", path.display());
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).expect("cannot create data/debug/");

    println!("Generating white noise ({W}×{H}, seed {SEED})…");
    let white = generate(W, H, &mut RandomSource::from_seed(SEED)).expect("white noise");
    write(&field_image(&white), out_dir, "white_noise.png");

    // ── 1. One image per smoothed octave ─────────────────────────────────────
    for octave in 0..OCTAVES {
        let layer = smooth(&white, octave).expect("smooth layer");
        write(&field_image(&layer), out_dir, &format!("octave_{octave}.png"));
    }

    // ── 2. Blended field ─────────────────────────────────────────────────────
    let blended = blend(&white, OCTAVES).expect("octave blend");
    println!("Blended range [{:.4}, {:.4}]", blended.min_value(), blended.max_value());
    write(&field_image(&blended), out_dir, "blended.png");

    // ── 3. Post-processing ───────────────────────────────────────────────────
    let colours = ColourGrid::from_noise(&blended);

    let mut contrasted = colours.clone();
    contrasted
        .apply(Command::Adjust { contrast: 96.0, brightness: -10.0 })
        .expect("adjust");
    write(&colour_image(&contrasted), out_dir, "adjusted.png");

    let mut filtered = colours;
    filtered.apply(Command::filter()).expect("filter");
    write(&colour_image(&filtered), out_dir, "filtered.png");

    println!("Done.");
}
