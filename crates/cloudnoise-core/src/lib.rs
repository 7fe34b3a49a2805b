//! Octave-blended value noise and the greyscale tone pipeline built on it.
//!
//! Stages, leaf-first: [`random_field`] → [`noise::smooth()`] →
//! [`noise::octave`] → [`tone`] → [`command::ColourGrid`].
//! [`generator::CloudGenerator`] runs them in order.

pub mod colour;
pub mod command;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod noise;
pub mod random_field;
pub mod tone;

pub use colour::Colour;
pub use command::{ColourGrid, Command};
pub use config::NoiseConfig;
pub use error::{NoiseError, Result};
pub use generator::CloudGenerator;
pub use grid::Grid;
pub use random_field::RandomSource;
