//! Root-finding error types.
//!
//! [`RootFindingError`] : common runtime errors
//! ├ non-finite function evaluation
//! └ invalid shared parameters (`tolerance`, `max_iter`)
//!
//! Per-algorithm errors (`BisectionError`, `NewtonError`, `SecantError`)
//! nest this enum via `#[error(transparent)]` and add their own
//! bracket/seed validation variants.

use thiserror::Error;

/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid shared configuration (tolerance <= 0, max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
