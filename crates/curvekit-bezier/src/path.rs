//! Smooth paths through a list of points.
//!
//! Every interior point gets a control-point pair from [`control_points`];
//! neighbouring pairs are joined with cubic segments and the two ends with
//! quadratic ones, so the path passes through every input point with a
//! continuous tangent.

use curvekit_core::{CurveError, PathOptions, Result};
use curvekit_math::VectorSpace;
use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Serialize};

use crate::bezier::{cubic_bezier, linear_bezier, quadratic_bezier};
use crate::control::control_points;
use crate::sample::sample_params;

/// One Bézier piece of a path. Points are listed in curve order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment<T> {
    Linear(T, T),
    Quadratic(T, T, T),
    Cubic(T, T, T, T),
}

impl<T: Copy> Segment<T> {
    pub fn point_at<S: Float>(&self, t: S) -> T
    where
        T: VectorSpace<S>,
    {
        match *self {
            Segment::Linear(p1, p2) => linear_bezier(p1, p2, t),
            Segment::Quadratic(p1, p2, p3) => quadratic_bezier(p1, p2, p3, t),
            Segment::Cubic(p1, p2, p3, p4) => cubic_bezier(p1, p2, p3, p4, t),
        }
    }

    pub fn start(&self) -> T {
        match *self {
            Segment::Linear(p, _) | Segment::Quadratic(p, _, _) | Segment::Cubic(p, _, _, _) => p,
        }
    }

    pub fn end(&self) -> T {
        match *self {
            Segment::Linear(_, p) | Segment::Quadratic(_, _, p) | Segment::Cubic(_, _, _, p) => p,
        }
    }
}

/// A chain of segments through an ordered list of points.
///
/// Always holds at least one segment; deserializing an empty list fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "SegmentList<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct SmoothPath<T> {
    segments: Vec<Segment<T>>,
}

/// Unchecked serde form of [`SmoothPath`].
#[derive(Deserialize)]
struct SegmentList<T> {
    segments: Vec<Segment<T>>,
}

impl<T> TryFrom<SegmentList<T>> for SmoothPath<T> {
    type Error = CurveError;

    fn try_from(list: SegmentList<T>) -> Result<Self> {
        if list.segments.is_empty() {
            // One segment spans two points.
            return Err(CurveError::InsufficientPoints {
                required: 2,
                actual: 0,
            });
        }
        Ok(Self {
            segments: list.segments,
        })
    }
}

impl<T: Copy> SmoothPath<T> {
    /// Build a path through `points`, in order.
    ///
    /// Two points give a single straight segment. Fails with fewer than two
    /// points, or when the tension is not finite in `f64` or in the scalar type.
    pub fn new<S: Float>(points: &[T], options: &PathOptions) -> Result<Self>
    where
        T: VectorSpace<S>,
    {
        if points.len() < 2 {
            return Err(CurveError::InsufficientPoints {
                required: 2,
                actual: points.len(),
            });
        }

        if !options.tension.is_finite() {
            return Err(CurveError::InvalidTension(options.tension.to_string()));
        }
        let tension: S = S::from(options.tension)
            .filter(|t| t.is_finite())
            .ok_or_else(|| {
                CurveError::InvalidTension(format!("{} out of scalar range", options.tension))
            })?;

        if points.len() == 2 {
            return Ok(Self {
                segments: vec![Segment::Linear(points[0], points[1])],
            });
        }

        // pairs[k] brackets points[k + 1]
        let pairs: Vec<(T, T)> = points
            .windows(3)
            .map(|w| control_points(w[0], w[1], w[2], tension))
            .collect();

        let n = points.len();
        let mut segments = Vec::with_capacity(n - 1);
        segments.push(Segment::Quadratic(points[0], pairs[0].0, points[1]));
        for (k, pair) in pairs.windows(2).enumerate() {
            segments.push(Segment::Cubic(
                points[k + 1],
                pair[0].1,
                pair[1].0,
                points[k + 2],
            ));
        }
        segments.push(Segment::Quadratic(
            points[n - 2],
            pairs[pairs.len() - 1].1,
            points[n - 1],
        ));

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Evaluate at a global parameter spread evenly over the segments.
    ///
    /// `u = 0` is the first point and `u = 1` the last. Outside that range the
    /// first or last segment is extrapolated.
    pub fn point_at<S>(&self, u: S) -> T
    where
        S: Float + 'static,
        usize: AsPrimitive<S>,
        T: VectorSpace<S>,
    {
        let last = self.segments.len() - 1;
        let count: S = self.segments.len().as_();
        let scaled = u * count;

        let index = if scaled <= S::zero() {
            0
        } else {
            scaled.floor().to_usize().map_or(last, |i| i.min(last))
        };
        let offset: S = index.as_();
        let local = scaled - offset;

        self.segments[index].point_at(local)
    }

    /// `count` points evenly spaced in the global parameter.
    pub fn sample<S>(&self, count: usize) -> Vec<T>
    where
        S: Float + 'static,
        usize: AsPrimitive<S>,
        T: VectorSpace<S>,
    {
        sample_params::<S>(count).map(|u| self.point_at(u)).collect()
    }
}
