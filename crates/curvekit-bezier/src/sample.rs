//! Evenly spaced parameters and curve sampling.

use curvekit_math::{inverse_lerp, VectorSpace};
use num_traits::{AsPrimitive, Float};

use crate::bezier::{cubic_bezier, linear_bezier, quadratic_bezier};

/// `count` parameters from 0 to 1 inclusive, evenly spaced.
///
/// A count of one yields a single 0; zero yields nothing.
pub fn sample_params<S>(count: usize) -> impl Iterator<Item = S> + Clone
where
    S: Float + 'static,
    usize: AsPrimitive<S>,
{
    let last: S = count.saturating_sub(1).as_();
    (0..count).map(move |i| inverse_lerp(S::zero(), last, i.as_()))
}

pub fn sample_linear<S, T>(p1: T, p2: T, count: usize) -> Vec<T>
where
    S: Float + 'static,
    usize: AsPrimitive<S>,
    T: VectorSpace<S>,
{
    sample_params::<S>(count)
        .map(|t| linear_bezier(p1, p2, t))
        .collect()
}

pub fn sample_quadratic<S, T>(p1: T, p2: T, p3: T, count: usize) -> Vec<T>
where
    S: Float + 'static,
    usize: AsPrimitive<S>,
    T: VectorSpace<S>,
{
    sample_params::<S>(count)
        .map(|t| quadratic_bezier(p1, p2, p3, t))
        .collect()
}

pub fn sample_cubic<S, T>(p1: T, p2: T, p3: T, p4: T, count: usize) -> Vec<T>
where
    S: Float + 'static,
    usize: AsPrimitive<S>,
    T: VectorSpace<S>,
{
    sample_params::<S>(count)
        .map(|t| cubic_bezier(p1, p2, p3, p4, t))
        .collect()
}
