//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::trace::Trace;

/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ToleranceReached`]
///     - All methods
///     - the method-specific stopping check passed before the cap
/// - [`TerminationReason::IterationLimit`]
///     - All methods
///     - cap reached first; the estimate is best-effort (bisection still
///       carries its `(b-a)/2^n` error bound, the open methods carry no
///       guarantee)
/// - [`TerminationReason::StalledDerivative`]
///     - newton_raphson only
///     - |f'(x)| fell below the stall guard; update abandoned
/// - [`TerminationReason::StalledSlope`]
///     - secant only
///     - |f(x1) - f(x0)| fell below the stall guard; update abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    StalledDerivative,
    StalledSlope,
}

impl TerminationReason {
    /// `true` only for a genuine tolerance-based stop.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, TerminationReason::ToleranceReached)
    }

    /// `true` when a numerical degeneracy ended the run early; the estimate
    /// is unreliable but the partial trace is still inspectable.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        matches!(
            self,
            TerminationReason::StalledDerivative | TerminationReason::StalledSlope
        )
    }
}

/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : best root estimate (always the last trace entry)
/// - `f_root`             : function value at `root`
/// - `iterations`         : update steps performed, never exceeds `max_iter`
/// - `evaluations`        : total function (and derivative) evaluations
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `trace`              : every estimate in chronological order ([`Trace`])
/// - `algorithm_name`     : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub trace               : Trace,
    pub algorithm_name      : &'static str,
}
