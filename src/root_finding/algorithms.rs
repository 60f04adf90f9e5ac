//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the supported methods
//! along with their display names and seed arities.

/// Root-finding algorithm variants.
/// ├ [`Algorithm::Bisection`]     : bracketing, needs an interval `[a, b]`
/// ├ [`Algorithm::NewtonRaphson`] : open, needs one seed and a derivative
/// └ [`Algorithm::Secant`]        : open, needs two seeds, derivative-free
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bisection,
    NewtonRaphson,
    Secant,
}

impl Algorithm {
    /// Algorithm names for the `algorithm_name` field of
    /// [`super::report::RootFindingReport`].
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection     => "bisection",
            Algorithm::NewtonRaphson => "newton_raphson",
            Algorithm::Secant        => "secant",
        }
    }

    /// Number of seed values the method consumes.
    /// ├ bisection      : 2 (bracket endpoints `a`, `b`)
    /// ├ newton_raphson : 1 (initial guess `x0`)
    /// └ secant         : 2 (initial guesses `x0`, `x1`)
    pub const fn seed_count(self) -> usize {
        match self {
            Algorithm::Bisection     => 2,
            Algorithm::NewtonRaphson => 1,
            Algorithm::Secant        => 2,
        }
    }

    /// How many seed values appear at the front of the trace.
    ///
    /// Bisection traces only midpoints; the open methods record their seeds
    /// before the first update. The trace length is therefore bounded by
    /// `max_iter + seeds_in_trace()`.
    pub const fn seeds_in_trace(self) -> usize {
        match self {
            Algorithm::Bisection     => 0,
            Algorithm::NewtonRaphson => 1,
            Algorithm::Secant        => 2,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
