use thiserror::Error;

/// Precondition failures raised at the entry of every public operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    #[error("grid dimensions must be at least 1×1, got {width}×{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("grid data holds {len} cells, expected {width}×{height}")]
    DataLength { len: usize, width: usize, height: usize },

    #[error("octave count {0} is out of range")]
    InvalidOctaveCount(u32),

    #[error("contrast {0} exceeds 255")]
    InvalidContrast(f32),

    #[error("brightness {0} is not a finite number")]
    InvalidBrightness(f32),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
