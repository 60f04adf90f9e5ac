//! Bisection method.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{RootFindingReport, TerminationReason};
use super::signs::sign_change;
use super::trace::Trace;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("bracket [{a}, {b}] does not straddle a sign change: f(a) * f(b) >= 0")]
    InvalidBracket { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and that `func(a)` and
/// `func(b)` have strictly opposite signs, guaranteeing a root inside the
/// interval. Every midpoint is recorded in the report's trace, so the
/// bracket-narrowing path can be replayed.
///
/// # Arguments
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bracket endpoint. Must be finite and less than `b`.
/// ├ `b`    - Upper bracket endpoint. Must be finite and greater than `a`.
/// └ `cfg`  - [`SolverCfg`] (tolerance, iteration cap).
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`  : the last midpoint computed
/// ├ `trace` : every midpoint, oldest first; `trace.last() == root`
/// └ `termination_reason`
///    ├ [`TerminationReason::ToleranceReached`] if `|f(c)| < tolerance`
///    │  or `|b - a| < tolerance` at some midpoint `c`
///    └ [`TerminationReason::IterationLimit`] if the cap ran out first;
///       the estimate still obeys the `(b₀ - a₀) / 2ⁿ` error bound
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`]  - `a` or `b` NaN/inf, or `a >= b`
/// ├ [`BisectionError::InvalidBracket`] - `f(a) * f(b) >= 0`; reported
/// │   before any iteration, no trace is produced
/// └ [`RootFindingError::NonFiniteEvaluation`] via
///   [`BisectionError::Common`] - `func(x)` produced NaN/inf
///
/// # Notes
/// └ A zero exactly at an endpoint counts as an invalid bracket: the test
///   is the literal product, not a sign-bit comparison.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    // precondition: the bracket must straddle a sign change
    let mut fa = eval(a)?;
    let fb = eval(b)?;
    if !sign_change(fa, fb) {
        return Err(BisectionError::InvalidBracket { a, b });
    }

    let mut trace = Trace::with_capacity(max_iter);

    // algorithm
    let mut midpoint = a;   // gets overwritten on the first pass
    let mut fm       = fa;  // gets overwritten on the first pass
    for iter in 1..=max_iter {
        midpoint = (a + b) / 2.0;
        fm = eval(midpoint)?;
        trace.push(midpoint);

        if fm.abs() < tol || (b - a).abs() < tol {
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                trace,
                algorithm_name      : ALGORITHM,
            });
        }

        // shrink the interval; root stays bracketed, width halves
        if sign_change(fa, fm) {
            b = midpoint;
        } else {
            a = midpoint;
            fa = fm;
        }
    }

    Ok(RootFindingReport {
        root                : midpoint,
        f_root              : fm,
        iterations          : max_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        trace,
        algorithm_name      : ALGORITHM,
    })
}
