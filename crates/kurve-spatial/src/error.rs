//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `kurve-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("conflict buffer must be positive and finite, got {0}")]
    InvalidBuffer(f64),

    #[error("query path point {index} is not finite")]
    NonFinitePath { index: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
