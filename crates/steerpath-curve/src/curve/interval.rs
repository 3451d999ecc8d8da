//! Resolving a query time to its bracketing pair of control points.

use steerpath_core::{Result, SteerError};
use tracing::trace;

use super::ControlPoint;
use crate::config::{EvalConfig, LowerBound};

/// Indices of the two consecutive control points a query time falls between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub prev: usize,
    pub next: usize,
}

impl Interval {
    fn ending_at(next: usize) -> Self {
        Self {
            prev: next - 1,
            next,
        }
    }
}

/// Find the interval `[next - 1, next]` for `time`.
///
/// `next` is the first control point whose time is strictly greater than
/// `time`, so a time equal to a control point's time belongs to the interval
/// that starts there. The last control point's time has no greater successor
/// and resolves to the interval ending at it.
///
/// `points` must be sorted ascending by time.
pub(crate) fn find_interval<P>(
    points: &[ControlPoint<P>],
    time: f64,
    config: &EvalConfig,
) -> Result<Interval> {
    let (first, last) = match points {
        [first, .., last] => (first.time, last.time),
        _ => {
            return Err(SteerError::InsufficientPoints {
                count: points.len(),
            })
        }
    };

    if !time.is_finite() {
        return Err(SteerError::NonFiniteTime(time));
    }

    let below = time < first && config.lower_bound == LowerBound::Reject;
    if time > last || below {
        return Err(SteerError::TimeOutOfRange {
            time,
            start: first,
            end: last,
        });
    }

    let mut next = points.partition_point(|p| p.time <= time);
    if next == points.len() {
        next = points.partition_point(|p| p.time < time);
    }
    let interval = Interval::ending_at(next.max(1));

    let (start, end) = (points[interval.prev].time, points[interval.next].time);
    if config.tolerance.is_degenerate_span(end - start) {
        return Err(SteerError::DegenerateInterval { time, start, end });
    }

    trace!(time, prev = interval.prev, next = interval.next, "resolved interval");
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(times: &[f64]) -> Vec<ControlPoint<f64>> {
        times.iter().map(|&t| ControlPoint::at(t, t)).collect()
    }

    fn find(times: &[f64], time: f64) -> Result<Interval> {
        find_interval(&points(times), time, &EvalConfig::default())
    }

    #[test]
    fn test_insufficient_points() {
        assert_eq!(
            find(&[], 0.0),
            Err(SteerError::InsufficientPoints { count: 0 })
        );
        assert_eq!(
            find(&[1.0], 1.0),
            Err(SteerError::InsufficientPoints { count: 1 })
        );
    }

    #[test]
    fn test_interior_time() {
        assert_eq!(find(&[0.0, 1.0, 2.0], 1.5).unwrap(), Interval::ending_at(2));
        assert_eq!(find(&[0.0, 1.0, 2.0], 0.25).unwrap(), Interval::ending_at(1));
    }

    #[test]
    fn test_exact_control_time_belongs_to_following_interval() {
        assert_eq!(find(&[0.0, 1.0, 2.0], 0.0).unwrap(), Interval::ending_at(1));
        assert_eq!(find(&[0.0, 1.0, 2.0], 1.0).unwrap(), Interval::ending_at(2));
    }

    #[test]
    fn test_last_time_resolves_to_final_interval() {
        assert_eq!(find(&[0.0, 1.0, 2.0], 2.0).unwrap(), Interval::ending_at(2));
    }

    #[test]
    fn test_past_end_is_out_of_range() {
        assert_eq!(
            find(&[0.0, 1.0], 1.0 + 1e-9),
            Err(SteerError::TimeOutOfRange {
                time: 1.0 + 1e-9,
                start: 0.0,
                end: 1.0
            })
        );
    }

    #[test]
    fn test_before_start_rejected_by_default() {
        assert!(matches!(
            find(&[0.0, 1.0], -0.5),
            Err(SteerError::TimeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_before_start_extrapolates_into_first_interval() {
        let found = find_interval(&points(&[0.0, 1.0, 2.0]), -3.0, &EvalConfig::extrapolating());
        assert_eq!(found.unwrap(), Interval::ending_at(1));
    }

    #[test]
    fn test_non_finite_time() {
        assert!(matches!(
            find(&[0.0, 1.0], f64::NAN),
            Err(SteerError::NonFiniteTime(t)) if t.is_nan()
        ));
        assert!(matches!(
            find(&[0.0, 1.0], f64::NEG_INFINITY),
            Err(SteerError::NonFiniteTime(_))
        ));
    }

    #[test]
    fn test_duplicate_interior_times_skip_zero_span() {
        // [0, 1, 1, 2]: time 1 lands after both duplicates
        assert_eq!(find(&[0.0, 1.0, 1.0, 2.0], 1.0).unwrap(), Interval::ending_at(3));
        assert_eq!(find(&[0.0, 1.0, 1.0, 2.0], 0.5).unwrap(), Interval::ending_at(1));
    }

    #[test]
    fn test_duplicate_end_times_use_first_end_point() {
        assert_eq!(find(&[0.0, 1.0, 1.0], 1.0).unwrap(), Interval::ending_at(1));
    }

    #[test]
    fn test_all_equal_times_are_degenerate() {
        assert!(matches!(
            find(&[2.0, 2.0], 2.0),
            Err(SteerError::DegenerateInterval { .. })
        ));
    }
}
