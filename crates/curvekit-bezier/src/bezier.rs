//! Closed-form Bézier curves of degree one to three.
//!
//! Each curve is evaluated by direct expansion of its Bernstein form: the
//! scalar weights are computed first, multiplied into each control point and
//! summed. Control points are never modified.
//!
//! `t` is expected in `[0, 1]` but is not clamped; other values extrapolate.

use curvekit_math::{lerp, VectorSpace};
use num_traits::Float;

/// `P = P1 + t(P2 − P1)`. Same as [`lerp`].
#[inline]
pub fn linear_bezier<S: Float, T: VectorSpace<S>>(p1: T, p2: T, t: S) -> T {
    lerp(p1, p2, t)
}

/// `P = (1−t)²P1 + 2(1−t)tP2 + t²P3`, with `p2` the control point.
#[inline]
pub fn quadratic_bezier<S: Float, T: VectorSpace<S>>(p1: T, p2: T, p3: T, t: S) -> T {
    let two = S::one() + S::one();
    let rev = S::one() - t;

    let a = p1 * (rev * rev);
    let b = p2 * (two * rev * t);
    let c = p3 * (t * t);

    a + b + c
}

/// `P = (1−t)³P1 + 3(1−t)²tP2 + 3(1−t)t²P3 + t³P4`, with `p2` and `p3` the
/// control points.
#[inline]
pub fn cubic_bezier<S: Float, T: VectorSpace<S>>(p1: T, p2: T, p3: T, p4: T, t: S) -> T {
    let three = S::one() + S::one() + S::one();
    let rev = S::one() - t;

    let a = p1 * (rev * rev * rev);
    let b = p2 * (three * rev * rev * t);
    let c = p3 * (three * rev * t * t);
    let d = p4 * (t * t * t);

    a + b + c + d
}
