use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteerError {
    #[error("Insufficient points: curve has {count} control point(s), at least 2 required")]
    InsufficientPoints { count: usize },

    #[error("Time {time} is outside the curve domain [{start}, {end}]")]
    TimeOutOfRange { time: f64, start: f64, end: f64 },

    #[error("Non-finite query time: {0}")]
    NonFiniteTime(f64),

    #[error("Degenerate interval at time {time}: control points at {start} and {end}")]
    DegenerateInterval { time: f64, start: f64, end: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, SteerError>;
