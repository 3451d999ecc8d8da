//! Time-stamped control points.

use steerpath_math::VectorSpace;

/// A `(time, position, tangent)` triple that shapes the curve at `time`.
///
/// `tangent` is the velocity of the curve at this point, in position units per
/// time unit. Hermite curves interpolate it; Catmull-Rom curves ignore it and
/// derive tangents from neighbouring points instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<P> {
    pub position: P,
    pub tangent: P,
    pub time: f64,
}

impl<P: VectorSpace> ControlPoint<P> {
    pub fn new(position: P, tangent: P, time: f64) -> Self {
        Self {
            position,
            tangent,
            time,
        }
    }

    /// A control point with a zero tangent, for curves that derive their own.
    pub fn at(position: P, time: f64) -> Self {
        Self::new(position, P::ZERO, time)
    }

    /// `true` if time, position and tangent are all finite.
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.position.is_finite() && self.tangent.is_finite()
    }
}
