//! steerpath curves: smooth paths through time-stamped waypoints.
//!
//! A [`Curve`] holds control points sorted by time and evaluates a piecewise
//! cubic through them, either as a Hermite spline using the stored tangents or
//! as a time-aware Catmull-Rom spline that derives tangents from neighbours.
//!
//! ```
//! use steerpath_curve::{ControlPoint, Curve, CurveKind};
//! use steerpath_math::DVec2;
//!
//! let mut curve = Curve::new(ControlPoint::at(DVec2::new(0.0, 0.0), 0.0), CurveKind::CatmullRom);
//! curve.add_control_points([
//!     ControlPoint::at(DVec2::new(4.0, 0.0), 2.0),
//!     ControlPoint::at(DVec2::new(2.0, 2.0), 1.0),
//! ]);
//!
//! let p = curve.calculate_point(1.0)?;
//! assert!((p - DVec2::new(2.0, 2.0)).length() < 1e-12);
//! assert!(curve.calculate_point(2.5).is_err());
//! # Ok::<(), steerpath_core::SteerError>(())
//! ```

pub mod config;
pub mod curve;
pub mod kernel;
pub mod tessellate;

pub use config::{EvalConfig, LowerBound};
pub use curve::{ControlPoint, Curve, CurveState, Interval};
pub use kernel::{CurveKind, Segment};
pub use tessellate::{curve_to_polyline, sample_uniform};
