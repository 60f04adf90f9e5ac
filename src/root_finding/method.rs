//! Tagged-union dispatch over the three root-finding methods.
//!
//! [`Method`] pairs an [`Algorithm`] with its seeds, so one call site —
//! [`find_root`] — can run whichever method the caller selected at runtime.
//! [`Method::from_seed_text`] parses the comma-separated seed field a user
//! would type (`"a, b"` for the two-seed methods, `"x0"` for Newton) and
//! rejects wrong arities before the core ever runs.

use std::str::FromStr;

use super::algorithms::Algorithm;
use super::bisection::{bisection, BisectionError};
use super::config::SolverCfg;
use super::newton::{newton_raphson, NewtonError};
use super::report::RootFindingReport;
use super::secant::{secant, SecantError};
use thiserror::Error;

/// A root-finding method together with its seed values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Method {
    Bisection { a: f64, b: f64 },
    NewtonRaphson { x0: f64 },
    Secant { x0: f64, x1: f64 },
}

#[derive(Debug, Error)]
pub enum SeedParseError {
    #[error("seed list '{text}' is not numeric")]
    NotNumeric { text: String },

    #[error("{algorithm} takes {expected} seed value(s). got {got}")]
    WrongSeedCount {
        algorithm: Algorithm,
        expected: usize,
        got: usize,
    },
}

/// Errors from [`find_root`]: the selected algorithm's own error, or a
/// Newton run requested without a derivative.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    Newton(#[from] NewtonError),

    #[error(transparent)]
    Secant(#[from] SecantError),

    #[error("newton_raphson requires a derivative")]
    MissingDerivative,
}

impl Method {
    /// The algorithm this method dispatches to.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Method::Bisection { .. }     => Algorithm::Bisection,
            Method::NewtonRaphson { .. } => Algorithm::NewtonRaphson,
            Method::Secant { .. }        => Algorithm::Secant,
        }
    }

    /// Parses a comma-separated seed list for `algorithm`.
    ///
    /// ┌ bisection      : `"a, b"`
    /// ├ newton_raphson : `"x0"`
    /// └ secant         : `"x0, x1"`
    ///
    /// # Errors
    /// ├ [`SeedParseError::NotNumeric`]     - any entry fails to parse
    /// └ [`SeedParseError::WrongSeedCount`] - arity mismatch for `algorithm`
    pub fn from_seed_text(algorithm: Algorithm, text: &str) -> Result<Self, SeedParseError> {
        let seeds = text
            .split(',')
            .map(str::trim)
            .map(f64::from_str)
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| SeedParseError::NotNumeric { text: text.to_owned() })?;

        let expected = algorithm.seed_count();
        if seeds.len() != expected {
            return Err(SeedParseError::WrongSeedCount {
                algorithm,
                expected,
                got: seeds.len(),
            });
        }

        Ok(match algorithm {
            Algorithm::Bisection     => Method::Bisection { a: seeds[0], b: seeds[1] },
            Algorithm::NewtonRaphson => Method::NewtonRaphson { x0: seeds[0] },
            Algorithm::Secant        => Method::Secant { x0: seeds[0], x1: seeds[1] },
        })
    }
}

/// Runs the selected [`Method`] against `func`.
///
/// `dfunc` is consulted only for [`Method::NewtonRaphson`]; passing `None`
/// there fails with [`SolveError::MissingDerivative`] before any
/// evaluation. The other methods ignore it.
///
/// ```
/// use rootviz::root_finding::{find_root, Method, SolverCfg};
///
/// let report = find_root(
///     |x: f64| x * x - 2.0,
///     None::<fn(f64) -> f64>,
///     Method::Bisection { a: 0.0, b: 2.0 },
///     SolverCfg::new(),
/// ).unwrap();
///
/// assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-6);
/// ```
pub fn find_root<F, G>(
    func: F,
    dfunc: Option<G>,
    method: Method,
    cfg: SolverCfg,
) -> Result<RootFindingReport, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    match method {
        Method::Bisection { a, b } => Ok(bisection(func, a, b, cfg)?),
        Method::NewtonRaphson { x0 } => {
            let dfunc = dfunc.ok_or(SolveError::MissingDerivative)?;
            Ok(newton_raphson(func, dfunc, x0, cfg)?)
        }
        Method::Secant { x0, x1 } => Ok(secant(func, x0, x1, cfg)?),
    }
}
