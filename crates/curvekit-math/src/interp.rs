//! Linear interpolation and its inverse.

use num_traits::Float;

use crate::VectorSpace;

/// Fraction of the way `v` sits between `a` and `b`.
///
/// Equal bounds return zero instead of dividing by zero. That result is
/// indistinguishable from `v == a`, so callers that care must check the range
/// themselves.
#[inline]
pub fn inverse_lerp<S: Float>(a: S, b: S, v: S) -> S {
    if b == a {
        return S::zero();
    }

    (v - a) / (b - a)
}

/// `a + t·(b − a)`. Any `t` is accepted; outside `[0, 1]` this extrapolates.
#[inline]
pub fn lerp<S: Float, T: VectorSpace<S>>(a: T, b: T, t: S) -> T {
    a + (b - a) * t
}
