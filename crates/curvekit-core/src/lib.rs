//! curvekit core types: errors and path configuration.

pub mod error;
pub mod options;

pub use error::{CurveError, Result};
pub use options::PathOptions;
