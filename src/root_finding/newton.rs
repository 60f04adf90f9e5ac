//! Newton-Raphson method.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{RootFindingReport, TerminationReason};
use super::trace::Trace;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::NewtonRaphson.algorithm_name();

/// Absolute threshold on `|f'(x)|` below which the tangent is treated as
/// horizontal and the run stalls. Deliberately not scaled to the function:
/// callers working at very small or very large derivative magnitudes should
/// account for the fixed cutoff.
pub const DERIVATIVE_GUARD: f64 = 1e-10;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x - f(x)/f'(x) undefined")]
    StepNotFinite { x: f64, step: f64 },
}

/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)` with finite-check
/// - `eval_dfx_checked` : evaluates the derivative `df(x)` with finite-check
#[inline]
fn eval_fx_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

#[inline]
fn eval_dfx_checked<G>(df: &mut G, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    G: FnMut(f64) -> f64,
{
    let dfx = { *evals += 1; df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a caller-supplied analytic derivative.
///
/// The trace opens with the seed `x0`; each accepted update appends one
/// iterate, so the final trace length is `iterations + 1` and its last
/// entry equals the reported root.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative
/// - `x0`    : finite initial guess
/// - `cfg`   : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootFindingReport`] whose `termination_reason` is one of
/// - [`TerminationReason::ToleranceReached`]   : `|x_next - x| < tolerance`
/// - [`TerminationReason::StalledDerivative`]  : `|f'(x)| < `
///   [`DERIVATIVE_GUARD`] before tolerance was met; the current estimate
///   and partial trace are returned so the path can still be inspected,
///   but the estimate is unreliable
/// - [`TerminationReason::IterationLimit`]     : cap reached; no
///   convergence guarantee holds for the returned estimate
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeNotFinite`] : `f'(x)` produced NaN/inf
/// - [`NewtonError::StepNotFinite`]       : `f(x)/f'(x)` overflowed
/// - [`RootFindingError::NonFiniteEvaluation`] via
///   [`NewtonError::Common`] : `f(x)` produced NaN/inf
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `f`;
///   near a multiple root (e.g. `x^3` at 0) convergence degrades to linear
///   but the derivative guard does not trip while `f'` stays above the
///   cutoff.
/// - For guaranteed convergence, prefer [`super::bisection`] with a valid
///   bracket.
pub fn newton_raphson<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let tol      = cfg.tolerance();
    let max_iter = cfg.max_iter();

    let mut evals: usize = 0;

    let mut trace = Trace::with_capacity(max_iter + 1);
    trace.push(x0);

    let mut x = x0;
    for iter in 1..=max_iter {
        let fx  = eval_fx_checked(&mut func, x, &mut evals)?;
        let dfx = eval_dfx_checked(&mut dfunc, x, &mut evals)?;

        // near-horizontal tangent: the update is numerically unstable.
        // stop with the current estimate rather than fail, the partial
        // trace is still worth inspecting.
        if dfx.abs() < DERIVATIVE_GUARD {
            return Ok(RootFindingReport {
                root                : x,
                f_root              : fx,
                iterations          : iter - 1,
                evaluations         : evals,
                termination_reason  : TerminationReason::StalledDerivative,
                trace,
                algorithm_name      : ALGORITHM,
            });
        }

        let step = fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let x_next = x - step;
        trace.push(x_next);

        if (x_next - x).abs() < tol {
            let f_root = eval_fx_checked(&mut func, x_next, &mut evals)?;
            return Ok(RootFindingReport {
                root                : x_next,
                f_root,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                trace,
                algorithm_name      : ALGORITHM,
            });
        }

        x = x_next;
    }

    let f_root = eval_fx_checked(&mut func, x, &mut evals)?;
    Ok(RootFindingReport {
        root                : x,
        f_root,
        iterations          : max_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        trace,
        algorithm_name      : ALGORITHM,
    })
}
