//! Secant method.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{RootFindingReport, TerminationReason};
use super::trace::Trace;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Secant.algorithm_name();

/// Absolute threshold on `|f(x1) - f(x0)|` below which the secant slope is
/// treated as degenerate and the run stalls. Like the Newton guard this is
/// a fixed cutoff, not scaled to the function values.
pub const SLOPE_GUARD: f64 = 1e-10;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },
}

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Derivative-free: each update intersects the line through the two most
/// recent iterates with the x-axis. The trace opens with both seeds, so the
/// final trace length is `iterations + 2` and its last entry equals the
/// reported root.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `x0`   : first seed, finite and distinct from `x1`
/// - `x1`   : second seed, finite and distinct from `x0`
/// - `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootFindingReport`] whose `termination_reason` is one of
/// - [`TerminationReason::ToleranceReached`] : `|x2 - x1| < tolerance`
/// - [`TerminationReason::StalledSlope`]     : `|f(x1) - f(x0)| < `
///   [`SLOPE_GUARD`]; the current estimate and partial trace are returned,
///   analogous to Newton's derivative guard
/// - [`TerminationReason::IterationLimit`]   : cap reached first
///
/// # Errors
/// - [`SecantError::InvalidGuess`] : `x0` or `x1` NaN/inf, or equal
/// - [`RootFindingError::NonFiniteEvaluation`] via
///   [`SecantError::Common`] : `f(x)` produced NaN/inf
///
/// # Notes
/// - Convergence is superlinear (~1.618) near simple roots but nothing is
///   guaranteed; poor seeds can diverge. For guaranteed convergence use
///   [`super::bisection`] with a valid bracket.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolverCfg,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    // track function evaluations
    let mut evals = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let mut trace = Trace::with_capacity(max_iter + 2);
    trace.push(x0);
    trace.push(x1);

    // main loop; (x_prev, x_curr) slide along the trace
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = eval(x_prev)?;
    let mut f_curr = eval(x_curr)?;
    for iter in 1..=max_iter {
        // near-equal function values: the secant is horizontal and its
        // x-intercept is meaningless. stop with the current estimate.
        if (f_curr - f_prev).abs() < SLOPE_GUARD {
            return Ok(RootFindingReport {
                root                : x_curr,
                f_root              : f_curr,
                iterations          : iter - 1,
                evaluations         : evals,
                termination_reason  : TerminationReason::StalledSlope,
                trace,
                algorithm_name      : ALGORITHM,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);
        trace.push(x_next);
        let f_next = eval(x_next)?;

        if (x_next - x_curr).abs() < tol {
            return Ok(RootFindingReport {
                root                : x_next,
                f_root              : f_next,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                trace,
                algorithm_name      : ALGORITHM,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Ok(RootFindingReport {
        root                : x_curr,
        f_root              : f_curr,
        iterations          : max_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        trace,
        algorithm_name      : ALGORITHM,
    })
}
