pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SteerError};
pub use tolerance::Tolerance;
