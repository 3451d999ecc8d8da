//! Time-aware Catmull-Rom kernel.

use steerpath_math::VectorSpace;

use super::Kernel;
use crate::curve::ControlPoint;

/// Derives each tangent from the neighbouring control points:
/// `m[k] = (P[k+1] - P[k-1]) / (t[k+1] - t[k-1])`.
///
/// The first and last control points lack one neighbour. They stand in for it
/// themselves (same position, same time), which reduces their tangent to the
/// one-sided difference over the single adjacent interval. A two-point curve
/// is therefore a straight line traversed at constant velocity.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CatmullRomKernel;

impl CatmullRomKernel {
    /// Tangent at control point `k`.
    ///
    /// `points` must hold at least two points and `k < points.len()`.
    pub(crate) fn tangent_at<P: VectorSpace>(points: &[ControlPoint<P>], k: usize) -> P {
        let last = points.len() - 1;
        let before = &points[k.saturating_sub(1)];
        let after = &points[(k + 1).min(last)];
        (after.position - before.position) / (after.time - before.time)
    }
}

impl Kernel for CatmullRomKernel {
    fn tangents<P: VectorSpace>(&self, points: &[ControlPoint<P>], next: usize) -> (P, P) {
        (
            Self::tangent_at(points, next - 1),
            Self::tangent_at(points, next),
        )
    }
}
