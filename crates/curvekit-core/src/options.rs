/// Settings for building a smooth path through a list of points.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Smoothing tension for derived control points.
    ///
    /// 0 gives straight joins, 0.5 the smoothest curve, 1 behaves like a radius.
    /// Values outside `[0, 1]` are accepted and exaggerate or reverse the joins.
    pub tension: f64,
}

impl PathOptions {
    pub const DEFAULT_TENSION: f64 = 0.5;

    pub fn new(tension: f64) -> Self {
        Self { tension }
    }

    /// Straight joins between points.
    pub fn linear() -> Self {
        Self { tension: 0.0 }
    }

    pub fn with_tension(self, tension: f64) -> Self {
        Self { tension }
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            tension: Self::DEFAULT_TENSION,
        }
    }
}
