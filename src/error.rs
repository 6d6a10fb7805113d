//! Errors raised when a world or configuration is rejected.
//!
//! Nothing fails mid-simulation. Malformed input is refused when it is built.

use alloc::string::String;
use core::fmt;

/// Errors that can occur while building a world or validating a config.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A stick references a particle index the world does not contain.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A scenario stick names a point that was never declared.
    UnknownPoint { name: String },
    /// Two scenario points share a name.
    DuplicatePoint { name: String },
    /// An explicit rest length is negative or not finite.
    InvalidRestLength { stick: usize },
    /// Width and height must be positive and finite.
    InvalidWorldSize,
    /// Friction must be in [0, 1].
    InvalidFriction,
    /// Bounce must be in [0, 1].
    InvalidBounce,
    /// Drag tolerance must be non-negative and finite.
    InvalidTolerance,
    /// Gravity must be finite.
    InvalidGravity,
    /// At least one stick sweep per frame.
    InvalidRelaxationPasses,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SimError::UnknownPoint { name } => {
                write!(f, "stick references unknown point '{}'", name)
            }
            SimError::DuplicatePoint { name } => {
                write!(f, "point '{}' declared more than once", name)
            }
            SimError::InvalidRestLength { stick } => {
                write!(f, "stick {} has a negative or non-finite rest length", stick)
            }
            SimError::InvalidWorldSize => {
                write!(f, "world width and height must be positive and finite")
            }
            SimError::InvalidFriction => write!(f, "friction must be in [0, 1]"),
            SimError::InvalidBounce => write!(f, "bounce must be in [0, 1]"),
            SimError::InvalidTolerance => write!(f, "drag tolerance must be non-negative"),
            SimError::InvalidGravity => write!(f, "gravity must be finite"),
            SimError::InvalidRelaxationPasses => {
                write!(f, "relaxation passes must be at least 1")
            }
        }
    }
}

impl core::error::Error for SimError {}
