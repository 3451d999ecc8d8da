/// Tolerances for curve evaluation and comparison.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Chord deviation below which polylines are never refined (in model units)
    pub linear: f64,
    /// Smallest time span treated as a non-degenerate interval
    pub temporal: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_TEMPORAL: f64 = 1e-12;

    pub fn new(linear: f64, temporal: f64) -> Self {
        Self { linear, temporal }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            temporal: Self::DEFAULT_TEMPORAL,
        }
    }

    /// Check if a time span is too short to interpolate across
    pub fn is_degenerate_span(self, span: f64) -> bool {
        span <= self.temporal
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
