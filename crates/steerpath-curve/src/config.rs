//! Evaluation settings.

use serde::{Deserialize, Serialize};
use steerpath_core::traits::Validate;
use steerpath_core::{Result, SteerError, Tolerance};

/// What to do with a query time earlier than the first control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerBound {
    /// Fail with [`SteerError::TimeOutOfRange`], mirroring the upper bound.
    #[default]
    Reject,
    /// Extend the first interval's cubic backwards in time.
    Extrapolate,
}

/// Settings a [`Curve`](crate::Curve) is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub lower_bound: LowerBound,
    pub tolerance: Tolerance,
}

impl EvalConfig {
    pub fn new(lower_bound: LowerBound, tolerance: Tolerance) -> Self {
        Self {
            lower_bound,
            tolerance,
        }
    }

    /// Accept times before the first control point.
    pub fn extrapolating() -> Self {
        Self {
            lower_bound: LowerBound::Extrapolate,
            ..Self::default()
        }
    }
}

impl Validate for EvalConfig {
    fn validate(&self) -> Result<()> {
        let Tolerance { linear, temporal } = self.tolerance;
        if !(linear.is_finite() && linear >= 0.0) {
            return Err(SteerError::InvalidConfiguration(format!(
                "linear tolerance must be finite and non-negative, got {linear}"
            )));
        }
        if !(temporal.is_finite() && temporal >= 0.0) {
            return Err(SteerError::InvalidConfiguration(format!(
                "temporal tolerance must be finite and non-negative, got {temporal}"
            )));
        }
        Ok(())
    }
}
