//! Sign utilities for root-finding algorithms.

/// Returns `true` if `u` and `v` straddle zero, judged by the literal
/// product as in the classical bracket test.
///
/// A zero at either point does not count as a sign change, so
/// `!sign_change(f(a), f(b))` is exactly the `f(a) * f(b) >= 0`
/// invalid-bracket precondition.
#[inline]
pub(crate) fn sign_change(u: f64, v: f64) -> bool {
    u * v < 0.0
}
