//! curvekit math: the vector capability trait, its backends, and interpolation.

pub mod interp;
pub mod vector;

pub use glam::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};
pub use interp::{inverse_lerp, lerp};
pub use vector::VectorSpace;
