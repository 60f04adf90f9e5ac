//! Iteration trace: the ordered sequence of root estimates produced by a
//! single algorithm run.
//!
//! A [`Trace`] is append-only while a run is in progress (mutation is
//! `pub(crate)`) and immutable once it leaves the crate inside a
//! [`super::report::RootFindingReport`]. On success it is never empty and
//! its last entry equals the returned root estimate.

/// Successive root approximations, in the exact order generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    estimates: Vec<f64>,
}

impl Trace {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self { estimates: Vec::with_capacity(cap) }
    }

    /// Appends the next estimate. Chronological order is the push order.
    pub(crate) fn push(&mut self, x: f64) {
        self.estimates.push(x);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.estimates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// First recorded estimate (a seed for the open methods, the first
    /// midpoint for bisection).
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.estimates.first().copied()
    }

    /// Last recorded estimate; equals the reported root.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.estimates.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.estimates.iter().copied()
    }

    /// Smallest and largest estimate visited, or `None` for an empty trace.
    #[must_use]
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = self.first()?;
        let (min, max) = self
            .iter()
            .fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
        Some((min, max))
    }

    /// Sampling domain for presentation: the span widened by one unit on
    /// each side, `[min(trace) - 1, max(trace) + 1]`.
    #[must_use]
    pub fn plot_domain(&self) -> Option<(f64, f64)> {
        let (min, max) = self.span()?;
        Some((min - 1.0, max + 1.0))
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.estimates
    }
}
