//! The time-parameterized curve and its control points.

mod control_point;
mod interval;

use steerpath_core::traits::{BoundingBox, Validate};
use steerpath_core::{Result, SteerError};
use steerpath_math::{Bounds, Point3, VectorSpace};
use tracing::debug;

use crate::config::EvalConfig;
use crate::kernel::{CurveKind, Segment};

pub use control_point::ControlPoint;
pub use interval::Interval;

/// Whether a curve has enough control points to be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveState {
    /// Fewer than two control points.
    Invalid,
    /// Two or more control points.
    Ready,
}

/// A piecewise cubic path through time-stamped control points.
///
/// Control points are kept sorted ascending by time. Points with equal times
/// keep their insertion order. Points are only ever appended; the spline kind
/// and evaluation settings are fixed once the curve is built.
#[derive(Debug, Clone)]
pub struct Curve<P = Point3> {
    control_points: Vec<ControlPoint<P>>,
    kind: CurveKind,
    config: EvalConfig,
}

impl<P: VectorSpace> Curve<P> {
    /// Start a curve from a single control point.
    ///
    /// The curve is [`CurveState::Invalid`] until a second point is added.
    pub fn new(start: ControlPoint<P>, kind: CurveKind) -> Self {
        Self::from_points([start], kind)
    }

    /// Build a curve from any set of control points, sorted by time.
    pub fn from_points<I>(points: I, kind: CurveKind) -> Self
    where
        I: IntoIterator<Item = ControlPoint<P>>,
    {
        let mut curve = Self {
            control_points: points.into_iter().collect(),
            kind,
            config: EvalConfig::default(),
        };
        curve.sort_control_points();
        curve
    }

    /// Replace the evaluation settings.
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a control point, then re-sort the whole sequence by time.
    pub fn add_control_point(&mut self, point: ControlPoint<P>) {
        self.control_points.push(point);
        self.sort_control_points();
        debug!(count = self.len(), time = point.time, "added control point");
    }

    /// Append several control points, then re-sort once.
    pub fn add_control_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = ControlPoint<P>>,
    {
        let before = self.len();
        self.control_points.extend(points);
        self.sort_control_points();
        debug!(
            added = self.len() - before,
            count = self.len(),
            "added control points"
        );
    }

    fn sort_control_points(&mut self) {
        self.control_points.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Position on the curve at `time`.
    pub fn calculate_point(&self, time: f64) -> Result<P> {
        Ok(self.segment_at(time)?.position(time))
    }

    /// Velocity (first time derivative) of the curve at `time`.
    ///
    /// Follows the same interval rules as [`calculate_point`](Self::calculate_point);
    /// at an interior control point this is the derivative of the following piece.
    pub fn calculate_velocity(&self, time: f64) -> Result<P> {
        Ok(self.segment_at(time)?.velocity(time))
    }

    /// The pair of control points bracketing `time`.
    pub fn interval_at(&self, time: f64) -> Result<Interval> {
        interval::find_interval(&self.control_points, time, &self.config).map_err(|err| {
            debug!(time, kind = %self.kind, %err, "curve evaluation failed");
            err
        })
    }

    /// Tangent the curve's kind uses at control point `index`.
    ///
    /// Hermite curves return the stored tangent; Catmull-Rom curves return the
    /// derived one. `None` if the curve is not robust or `index` is out of range.
    pub fn control_tangent(&self, index: usize) -> Option<P> {
        if !self.check_robust() || index >= self.len() {
            return None;
        }
        Some(self.kind.tangent_at(&self.control_points, index))
    }

    fn segment_at(&self, time: f64) -> Result<Segment<P>> {
        let interval = self.interval_at(time)?;
        Ok(self.kind.segment(&self.control_points, interval.next))
    }

    /// `true` if the curve has at least two control points.
    pub fn check_robust(&self) -> bool {
        self.control_points.len() >= 2
    }

    /// `Ready` once the curve holds two points; never reverts.
    pub fn state(&self) -> CurveState {
        if self.check_robust() {
            CurveState::Ready
        } else {
            CurveState::Invalid
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Control points in ascending time order.
    pub fn control_points(&self) -> &[ControlPoint<P>] {
        &self.control_points
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Times of the first and last control points.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match self.control_points.as_slice() {
            [] => None,
            [only] => Some((only.time, only.time)),
            [first, .., last] => Some((first.time, last.time)),
        }
    }
}

impl<P: VectorSpace> Validate for Curve<P> {
    fn validate(&self) -> Result<()> {
        if !self.check_robust() {
            return Err(SteerError::InsufficientPoints { count: self.len() });
        }
        if let Some(index) = self.control_points.iter().position(|p| !p.is_finite()) {
            return Err(SteerError::Geometry(format!(
                "control point {index} has a non-finite component"
            )));
        }
        self.config.validate()
    }
}

impl<P: VectorSpace> BoundingBox for Curve<P> {
    type Bounds = Bounds<P>;

    /// Bounds of the control point positions.
    fn bounding_box(&self) -> Option<Bounds<P>> {
        Bounds::from_points(self.control_points.iter().map(|p| p.position))
    }
}
