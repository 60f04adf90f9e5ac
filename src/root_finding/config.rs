//! Shared configuration for root-finding algorithms.
//!
//! Provides [`SolverCfg`], the parameter set every method consumes:
//! ├ `tolerance` : stopping threshold (method-specific check, see each
//! │               algorithm's docs)
//! └ `max_iter`  : hard cap on update steps, never exceeded
//!
//! [`SolverCfg::new`] initializes the configuration with defaults; the
//! `set_*` setters validate their argument and fail with a
//! [`RootFindingError`] before any iteration runs.

use super::errors::RootFindingError;

pub const DEFAULT_TOLERANCE: f64   = 1e-6;
pub const DEFAULT_MAX_ITER: usize  = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iter:  DEFAULT_MAX_ITER,
        }
    }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self) -> f64  { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self::new()
    }
}
