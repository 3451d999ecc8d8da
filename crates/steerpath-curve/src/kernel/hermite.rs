//! Cubic Hermite segments and the stored-tangent kernel.

use steerpath_math::VectorSpace;

use super::Kernel;
use crate::curve::ControlPoint;

/// One cubic piece between two control points.
///
/// Position blending uses the normalized parameter `s = (t - t0) / dt`, while
/// the tangent terms use the raw elapsed time `e = t - t0`. Tangents therefore
/// keep their position-per-time units whatever the interval length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<P> {
    pub p0: P,
    pub p1: P,
    pub m0: P,
    pub m1: P,
    pub t0: f64,
    pub t1: f64,
}

impl<P: VectorSpace> Segment<P> {
    /// Build the segment spanning `prev..=next` with the given end tangents.
    pub fn between(prev: &ControlPoint<P>, next: &ControlPoint<P>, m0: P, m1: P) -> Self {
        Self {
            p0: prev.position,
            p1: next.position,
            m0,
            m1,
            t0: prev.time,
            t1: next.time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.t1 - self.t0
    }

    pub fn position(&self, time: f64) -> P {
        let dt = self.duration();
        let e = time - self.t0;
        let s = e / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let c0 = e * e * e / (dt * dt) - 2.0 * e * e / dt + e;
        let c1 = e * e * e / (dt * dt) - e * e / dt;

        self.p0 * h00 + self.p1 * h01 + self.m0 * c0 + self.m1 * c1
    }

    /// First derivative of [`position`](Self::position) with respect to time.
    pub fn velocity(&self, time: f64) -> P {
        let dt = self.duration();
        let e = time - self.t0;
        let s = e / dt;
        let s2 = s * s;

        let dh00 = (6.0 * s2 - 6.0 * s) / dt;
        let dh01 = (-6.0 * s2 + 6.0 * s) / dt;
        let dc0 = 3.0 * e * e / (dt * dt) - 4.0 * e / dt + 1.0;
        let dc1 = 3.0 * e * e / (dt * dt) - 2.0 * e / dt;

        self.p0 * dh00 + self.p1 * dh01 + self.m0 * dc0 + self.m1 * dc1
    }
}

/// Uses the tangents stored on the control points.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HermiteKernel;

impl Kernel for HermiteKernel {
    fn tangents<P: VectorSpace>(&self, points: &[ControlPoint<P>], next: usize) -> (P, P) {
        (points[next - 1].tangent, points[next].tangent)
    }
}
