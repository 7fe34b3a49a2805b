//! Intensity → colour mapping and colour post-processing.
//!
//! Tone curve: `f(x) = factor · (x − 128) + 128 + brightness` on the 0–255
//! scale, clamped, where
//! `factor = 259 · (contrast + 255) / (255 · (259 − contrast))`.
//! At −255 the curve is flat, at 0 it is the identity, below −255 it inverts,
//! and it diverges as contrast approaches 259. Contrast above 255 is rejected.
use crate::colour::Colour;
use crate::error::{NoiseError, Result};

/// Largest accepted contrast.
pub const CONTRAST_LIMIT: f32 = 255.0;

/// Map a normalized intensity to a greyscale colour, rounding and clamping to 0–255.
#[inline]
pub fn to_colour(v: f32) -> Colour {
    let byte = (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Colour::grey(byte)
}

/// A validated contrast/brightness curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    factor: f32,
    brightness: f32,
}

impl ToneCurve {
    pub fn new(contrast: f32, brightness: f32) -> Result<Self> {
        if !contrast.is_finite() || contrast > CONTRAST_LIMIT {
            return Err(NoiseError::InvalidContrast(contrast));
        }
        if !brightness.is_finite() {
            return Err(NoiseError::InvalidBrightness(brightness));
        }
        let c = contrast as f64;
        let factor = ((259.0 * (c + 255.0)) / (255.0 * (259.0 - c))) as f32;
        Ok(Self { factor, brightness })
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Apply the curve to a normalized intensity; the result is in `[0, 1]`.
    #[inline]
    pub fn apply(&self, v: f32) -> f32 {
        let x = v * 255.0;
        let y = (self.factor * (x - 128.0) + 128.0 + self.brightness).clamp(0.0, 255.0);
        y / 255.0
    }
}

/// One-shot form of [`ToneCurve::apply`].
pub fn adjust_contrast_brightness(v: f32, contrast: f32, brightness: f32) -> Result<f32> {
    Ok(ToneCurve::new(contrast, brightness)?.apply(v))
}

/// XOR the packed 24-bit forms of `c` and `mask`. Applying the same mask twice
/// restores `c`.
#[inline]
pub fn xor_filter(c: Colour, mask: Colour) -> Colour {
    Colour::from_packed(c.to_packed() ^ mask.to_packed())
}
