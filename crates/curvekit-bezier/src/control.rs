//! Smooth control points around a spline knot.
//!
//! Given three consecutive points, derive the pair of Bézier control points
//! that bracket the middle one so the curve passes through it without a kink.
//! The pair lies on a line parallel to the chord `p3 − p1`, each side pushed
//! out in proportion to the distance to its neighbour.

use curvekit_core::PathOptions;
use curvekit_math::VectorSpace;
use num_traits::{AsPrimitive, Float};

/// Tension used when none is given.
pub const DEFAULT_TENSION: f64 = PathOptions::DEFAULT_TENSION;

/// Control points `(before, after)` around `p2` for a spline running from
/// `p1` through `p2` to `p3`.
///
/// `tension` of 0 collapses both onto `p2`, 0.5 gives the smoothest curve and
/// 1 behaves like a radius. It is not clamped.
///
/// When `‖p1 − p2‖ + ‖p2 − p3‖` is within machine epsilon of zero both
/// control points are `p2`. The threshold is absolute.
pub fn control_points<S: Float, T: VectorSpace<S>>(p1: T, p2: T, p3: T, tension: S) -> (T, T) {
    let d12 = (p1 - p2).norm();
    let d23 = (p2 - p3).norm();
    let d13 = d12 + d23;

    let eps = S::epsilon();
    if d13 >= -eps && d13 <= eps {
        return (p2, p2);
    }

    let fa = tension * d12 / d13;
    let fb = tension * d23 / d13;

    let p31 = p3 - p1;
    let pc1 = p2 - p31 * fa;
    let pc2 = p2 + p31 * fb;

    (pc1, pc2)
}

/// [`control_points`] with [`DEFAULT_TENSION`].
pub fn control_points_default<S, T>(p1: T, p2: T, p3: T) -> (T, T)
where
    S: Float + 'static,
    f64: AsPrimitive<S>,
    T: VectorSpace<S>,
{
    control_points(p1, p2, p3, DEFAULT_TENSION.as_())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::{dvec2, vec2};

    #[test]
    fn test_coincident_points_collapse() {
        let p = dvec2(3.0, -7.0);
        for tension in [0.0, 0.5, 1.0, 4.0, -2.0] {
            assert_eq!(control_points(p, p, p, tension), (p, p));
        }
    }

    #[test]
    fn test_near_coincident_points_collapse() {
        let p = vec2(0.0, 0.0);
        let q = vec2(f32::EPSILON * 0.25, 0.0);
        assert_eq!(control_points(p, q, p, 0.5f32), (q, q));
    }

    #[test]
    fn test_threshold_is_absolute() {
        // Tiny but distinct points are treated as degenerate.
        let p1 = dvec2(0.0, 0.0);
        let p2 = dvec2(1e-17, 0.0);
        let p3 = dvec2(2e-17, 0.0);
        assert_eq!(control_points(p1, p2, p3, 0.5), (p2, p2));
    }

    #[test]
    fn test_symmetric_knot() {
        let (pc1, pc2) = control_points(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0), 0.5);
        // fa = fb = 0.25, chord = (2, 0)
        assert!((pc1 - dvec2(0.5, 1.0)).length() < 1e-12);
        assert!((pc2 - dvec2(1.5, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_asymmetric_distances_weight_each_side() {
        let (pc1, pc2) = control_points(0.0f64, 1.0, 4.0, 1.0);
        // d12 = 1, d23 = 3, chord = 4
        assert_abs_diff_eq!(pc1, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pc2, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_tension_collapses_onto_knot() {
        let p2 = dvec2(1.0, 2.0);
        let (pc1, pc2) = control_points(dvec2(0.0, 0.0), p2, dvec2(3.0, 1.0), 0.0);
        assert_eq!(pc1, p2);
        assert_eq!(pc2, p2);
    }

    #[test]
    fn test_negative_tension_reverses() {
        let (pc1, pc2) = control_points(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0), -0.5);
        assert!((pc1 - dvec2(1.5, 1.0)).length() < 1e-12);
        assert!((pc2 - dvec2(0.5, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_default_tension_f32() {
        let (p1, p2, p3) = (vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(3.0, 0.5));
        assert_eq!(
            control_points_default(p1, p2, p3),
            control_points(p1, p2, p3, DEFAULT_TENSION as f32)
        );
    }

    #[test]
    fn test_default_tension() {
        let p = (dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(3.0, 0.5));
        assert_eq!(
            control_points_default(p.0, p.1, p.2),
            control_points(p.0, p.1, p.2, DEFAULT_TENSION)
        );
    }
}
