//! Engine error type.
//!
//! Sub-crates define their own error enums and wrap `KurveError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Configuration and setup errors shared by every `kurve-*` crate.
///
/// Terminal collisions are *not* errors; they are reported as agent-disabled
/// events by the arena.
#[derive(Debug, Error)]
pub enum KurveError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("degenerate geometry: {0}")]
    Geometry(String),

    #[error("no valid spawn position after {attempts} attempts")]
    SpawnExhausted { attempts: usize },
}

/// Shorthand result type for all `kurve-*` crates.
pub type KurveResult<T> = Result<T, KurveError>;
