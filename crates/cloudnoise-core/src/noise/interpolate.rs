use std::f32::consts::PI;

/// Cosine-eased interpolation from `a` (at `blend = 0`) to `b` (at `blend = 1`).
///
/// The ease has zero slope at both ends, which is what keeps octave anchors
/// from showing up as creases. Blends outside `[0, 1]` are evaluated by the same
/// formula, not clamped.
#[inline]
pub fn interpolate(a: f32, b: f32, blend: f32) -> f32 {
    let f = (1.0 - (blend * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}
