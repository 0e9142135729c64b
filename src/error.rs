//! Setup errors
//!
//! Everything that can go wrong happens before the first frame. The frame
//! step itself has no failure paths.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// The skyline produced no buildings, so no collision threshold exists
    EmptySkyline,
    /// A size that must be positive and finite was not
    InvalidDimension { name: &'static str, value: f32 },
    /// Enemy spawn period of zero frames would never fire
    ZeroSpawnPeriod,
    /// Target frame rate of zero
    ZeroFrameRate,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptySkyline => write!(f, "building layout produced no buildings"),
            SetupError::InvalidDimension { name, value } => {
                write!(f, "invalid {name}: {value} (must be positive and finite)")
            }
            SetupError::ZeroSpawnPeriod => write!(f, "enemy spawn period must be at least one frame"),
            SetupError::ZeroFrameRate => write!(f, "target frame rate must be non-zero"),
        }
    }
}

impl std::error::Error for SetupError {}
