//! curvekit curves: Bézier evaluation, smooth control points, and smooth paths.
//!
//! All curve functions are generic over [`VectorSpace`], so they work with
//! plain scalars, glam vectors and nalgebra vectors alike:
//!
//! ```
//! use curvekit_bezier::{control_points, quadratic_bezier};
//! use glam::dvec2;
//!
//! let p = quadratic_bezier(dvec2(0.0, 0.0), dvec2(0.4, 1.0), dvec2(1.0, 0.0), 0.5);
//! assert!((p - dvec2(0.45, 0.5)).length() < 1e-12);
//!
//! let (before, after) = control_points(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0), 0.5);
//! assert_eq!(before.y, after.y);
//! ```

pub mod bezier;
pub mod control;
pub mod path;
pub mod sample;

pub use bezier::{cubic_bezier, linear_bezier, quadratic_bezier};
pub use control::{control_points, control_points_default, DEFAULT_TENSION};
pub use curvekit_core::{CurveError, PathOptions, Result};
pub use curvekit_math::{inverse_lerp, lerp, VectorSpace};
pub use path::{Segment, SmoothPath};
pub use sample::{sample_cubic, sample_linear, sample_params, sample_quadratic};
