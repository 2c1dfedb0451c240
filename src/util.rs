use kurbo::Vec2;

use crate::tolerance::Tolerance;

/// Largest parameter that still maps strictly inside the last segment.
pub(crate) const MAX_INTERIOR_T: f64 = 1.0 - f64::EPSILON;

/// Map a global parameter to a segment index and a local parameter.
///
/// `n` must be non-zero. The index is always in range, even if rounding in
/// `t * n` lands exactly on `n`.
pub(crate) fn locate(t: f64, n: usize) -> (usize, f64) {
    debug_assert!(n > 0);
    let t = t.max(0.0).min(1.0) * n as f64;
    let i = (t.floor() as usize).min(n - 1);
    (i, t - i as f64)
}

/// Check that `deriv(seg, 1)` equals `deriv(next, 0)` at every joint.
pub(crate) fn joints_match<C>(
    curves: &[C],
    tol: Tolerance,
    deriv: impl Fn(&C, f64) -> Vec2,
) -> bool {
    curves
        .windows(2)
        .all(|pair| tol.vectors_match(deriv(&pair[0], 1.0), deriv(&pair[1], 0.0)))
}
