//! Interpolation kernels.
//!
//! Both kernels share the cubic Hermite basis in [`Segment`]; they differ only
//! in where the tangents at the ends of an interval come from.

mod catmull_rom;
mod hermite;

use steerpath_math::VectorSpace;

use crate::curve::ControlPoint;

pub(crate) use catmull_rom::CatmullRomKernel;
pub(crate) use hermite::HermiteKernel;
pub use hermite::Segment;

/// Tangent policy for the interval `[next - 1, next]` of a sorted point slice.
///
/// Callers guarantee `1 <= next < points.len()`; [`Curve`](crate::Curve) only
/// reaches a kernel after resolving a valid interval.
pub(crate) trait Kernel {
    /// Tangents at the start and end of the interval ending at `next`.
    ///
    /// `next` is always in `1..points.len()`.
    fn tangents<P: VectorSpace>(&self, points: &[ControlPoint<P>], next: usize) -> (P, P);

    /// The cubic piece for the interval ending at `next`.
    fn segment<P: VectorSpace>(&self, points: &[ControlPoint<P>], next: usize) -> Segment<P> {
        let (m0, m1) = self.tangents(points, next);
        Segment::between(&points[next - 1], &points[next], m0, m1)
    }
}

/// Which spline a [`Curve`](crate::Curve) is evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveKind {
    /// Interpolates stored positions and tangents.
    #[default]
    Hermite,
    /// Interpolates positions; tangents come from neighbouring points.
    CatmullRom,
}

impl CurveKind {
    pub(crate) fn segment<P: VectorSpace>(
        self,
        points: &[ControlPoint<P>],
        next: usize,
    ) -> Segment<P> {
        match self {
            CurveKind::Hermite => HermiteKernel.segment(points, next),
            CurveKind::CatmullRom => CatmullRomKernel.segment(points, next),
        }
    }

    /// Tangent this kind uses at control point `k` of a robust, sorted slice.
    pub(crate) fn tangent_at<P: VectorSpace>(self, points: &[ControlPoint<P>], k: usize) -> P {
        match self {
            CurveKind::Hermite => points[k].tangent,
            CurveKind::CatmullRom => CatmullRomKernel::tangent_at(points, k),
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveKind::Hermite => write!(f, "hermite"),
            CurveKind::CatmullRom => write!(f, "catmull-rom"),
        }
    }
}
