//! Configuration errors
//!
//! The engine is total once built; everything that can go wrong is caught
//! when a field, driver or scenario is constructed.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a field needs at least one body")]
    NoBodies,

    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: position and velocity must be finite")]
    NonFiniteBody { index: usize },

    #[error("body {index}: `{field}` needs 3 components, got {len}")]
    BadDimension {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("gravitational constant must be finite, got {0}")]
    InvalidGravity(f64),

    #[error("trajectory capacity must be at least 1")]
    InvalidTrailCapacity,

    #[error("frame span must be positive and finite, got {0}")]
    InvalidFrameSpan(f64),
}
