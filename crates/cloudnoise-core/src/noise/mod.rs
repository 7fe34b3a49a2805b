//! Octave-blended value noise.
//!
//! White noise is smoothed once per octave by bilinear (cosine-eased)
//! interpolation between anchors `2^k` cells apart, then the layers are summed
//! with amplitude halving per octave and normalized back into `[0, 1]`.
pub mod interpolate;
pub mod octave;
pub mod smooth;

pub use interpolate::interpolate;
pub use octave::{blend, PERSISTENCE};
pub use smooth::smooth;
