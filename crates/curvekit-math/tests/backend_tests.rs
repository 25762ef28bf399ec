use approx::assert_abs_diff_eq;
use curvekit_math::{inverse_lerp, lerp, Vec3, VectorSpace};
use nalgebra::{Vector2, Vector4};
use num_traits::Float;

fn chord_length<S: Float, T: VectorSpace<S>>(a: T, b: T) -> S {
    (b - a).norm()
}

#[test]
fn test_lerp_matches_across_backends() {
    let g = lerp(glam::dvec2(1.0, 0.0), glam::dvec2(0.0, 1.0), 0.25);
    let n = lerp(Vector2::new(1.0f64, 0.0), Vector2::new(0.0, 1.0), 0.25);
    assert_abs_diff_eq!(g.x, n.x, epsilon = 1e-12);
    assert_abs_diff_eq!(g.y, n.y, epsilon = 1e-12);
}

#[test]
fn test_generic_norm_on_each_backend() {
    assert_abs_diff_eq!(chord_length(1.0f64, -2.0), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        chord_length(Vec3::ZERO, Vec3::new(2.0, 3.0, 6.0)),
        7.0,
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(
        chord_length(Vector4::<f32>::zeros(), Vector4::new(1.0, 1.0, 1.0, 1.0)),
        2.0,
        epsilon = 1e-6
    );
}

#[test]
fn test_lerp_scalar_round_trip_f32() {
    let (a, b) = (0.0f32, 9.0);
    for i in 0..10 {
        let v = i as f32;
        let t = inverse_lerp(a, b, v);
        assert_abs_diff_eq!(lerp(a, b, t), v, epsilon = 1e-5);
    }
}
