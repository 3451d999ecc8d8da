use serde::{Deserialize, Serialize};

use crate::VectorSpace;

/// Axis-aligned bounds over any [`VectorSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<P> {
    pub min: P,
    pub max: P,
}

impl<P: VectorSpace> Bounds<P> {
    pub fn new(min: P, max: P) -> Self {
        Self { min, max }
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grow the bounds to contain `p`.
    pub fn include(&mut self, p: P) {
        self.min = self.min.component_min(p);
        self.max = self.max.component_max(p);
    }
}
