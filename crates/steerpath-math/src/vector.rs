//! Point/vector arithmetic needed by curve evaluation.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, DVec3};

/// A real vector space that curve positions and tangents live in.
///
/// Implemented for scalar `f64` (1D tracks), [`DVec2`] and [`DVec3`].
pub trait VectorSpace:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;

    /// Euclidean length.
    fn length(self) -> f64;

    /// Component-wise minimum.
    fn component_min(self, other: Self) -> Self;

    /// Component-wise maximum.
    fn component_max(self, other: Self) -> Self;

    /// `true` if every component is finite.
    fn is_finite(self) -> bool;

    /// Euclidean distance between two points.
    fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Check if two points coincide within `epsilon`.
    fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.distance(other) <= epsilon
    }
}

impl VectorSpace for f64 {
    const ZERO: Self = 0.0;

    fn length(self) -> f64 {
        self.abs()
    }

    fn component_min(self, other: Self) -> Self {
        f64::min(self, other)
    }

    fn component_max(self, other: Self) -> Self {
        f64::max(self, other)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

macro_rules! impl_glam_vector_space {
    ($($ty:ident),*) => {
        $(
            impl VectorSpace for $ty {
                const ZERO: Self = $ty::ZERO;

                fn length(self) -> f64 {
                    $ty::length(self)
                }

                fn component_min(self, other: Self) -> Self {
                    $ty::min(self, other)
                }

                fn component_max(self, other: Self) -> Self {
                    $ty::max(self, other)
                }

                fn is_finite(self) -> bool {
                    $ty::is_finite(self)
                }
            }
        )*
    };
}

impl_glam_vector_space!(DVec2, DVec3);
