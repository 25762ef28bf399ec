//! The arithmetic capability set curves are generic over.

use std::ops::{Add, Mul, Sub};

use num_traits::Float;

/// A point or vector that curves can blend.
///
/// Anything with `+`, `-`, right-hand scalar `*` and a Euclidean norm
/// qualifies: plain scalars, glam vectors and nalgebra column vectors are
/// provided here.
pub trait VectorSpace<S: Float>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<S, Output = Self>
{
    /// Euclidean length.
    fn norm(self) -> S;
}

macro_rules! impl_scalar {
    ($($s:ty),*) => {$(
        impl VectorSpace<$s> for $s {
            #[inline]
            fn norm(self) -> $s {
                self.abs()
            }
        }
    )*};
}

macro_rules! impl_glam {
    ($($v:ty => $s:ty),*) => {$(
        impl VectorSpace<$s> for $v {
            #[inline]
            fn norm(self) -> $s {
                self.length()
            }
        }
    )*};
}

macro_rules! impl_nalgebra {
    ($($v:ident),*) => {$(
        impl_nalgebra!(@one $v, f32);
        impl_nalgebra!(@one $v, f64);
    )*};
    (@one $v:ident, $s:ty) => {
        impl VectorSpace<$s> for nalgebra::$v<$s> {
            #[inline]
            fn norm(self) -> $s {
                self.magnitude()
            }
        }
    };
}

impl_scalar!(f32, f64);

impl_glam!(
    glam::Vec2 => f32,
    glam::Vec3 => f32,
    glam::Vec4 => f32,
    glam::DVec2 => f64,
    glam::DVec3 => f64,
    glam::DVec4 => f64
);

impl_nalgebra!(Vector2, Vector3, Vector4);
