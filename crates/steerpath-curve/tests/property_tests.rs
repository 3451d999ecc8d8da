//! Property-based tests for curve evaluation.

use proptest::prelude::*;
use steerpath_core::SteerError;
use steerpath_curve::{ControlPoint, Curve, CurveKind};
use steerpath_math::DVec2;

fn kind() -> impl Strategy<Value = CurveKind> {
    prop_oneof![Just(CurveKind::Hermite), Just(CurveKind::CatmullRom)]
}

/// Control points with strictly increasing times, in shuffled insertion order.
fn control_points() -> impl Strategy<Value = Vec<ControlPoint<DVec2>>> {
    prop::collection::vec(
        (0.1f64..5.0, -50.0f64..50.0, -50.0f64..50.0, -5.0f64..5.0, -5.0f64..5.0),
        2..8,
    )
    .prop_map(|raw| {
        let mut time = 0.0;
        raw.into_iter()
            .map(|(gap, x, y, tx, ty)| {
                time += gap;
                ControlPoint::new(DVec2::new(x, y), DVec2::new(tx, ty), time)
            })
            .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

proptest! {
    #[test]
    fn passes_through_every_control_point(points in control_points(), kind in kind()) {
        let curve = Curve::from_points(points, kind);
        for cp in curve.control_points() {
            let p = curve.calculate_point(cp.time).unwrap();
            prop_assert!((p - cp.position).length() < 1e-6, "t={} got {:?}", cp.time, p);
        }
    }

    #[test]
    fn insertion_order_is_irrelevant(points in control_points(), kind in kind(), frac in 0.0f64..=1.0) {
        let mut sorted = points.clone();
        sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
        let from_sorted = Curve::from_points(sorted, kind);

        let mut incremental = Curve::new(points[0], kind);
        for &cp in &points[1..] {
            incremental.add_control_point(cp);
        }

        let (start, end) = from_sorted.domain().unwrap();
        let t = (start + (end - start) * frac).min(end);
        prop_assert_eq!(from_sorted.calculate_point(t), incremental.calculate_point(t));
    }

    #[test]
    fn evaluation_is_idempotent(points in control_points(), kind in kind(), frac in 0.0f64..=1.0) {
        let curve = Curve::from_points(points, kind);
        let (start, end) = curve.domain().unwrap();
        let t = (start + (end - start) * frac).min(end);
        let a = curve.calculate_point(t).unwrap();
        let b = curve.calculate_point(t).unwrap();
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn in_range_results_are_finite(points in control_points(), kind in kind(), frac in 0.0f64..=1.0) {
        let curve = Curve::from_points(points, kind);
        let (start, end) = curve.domain().unwrap();
        let t = (start + (end - start) * frac).min(end);
        prop_assert!(curve.calculate_point(t).unwrap().is_finite());
        prop_assert!(curve.calculate_velocity(t).unwrap().is_finite());
    }

    #[test]
    fn past_end_is_out_of_range(points in control_points(), kind in kind(), overshoot in 1e-6f64..100.0) {
        let curve = Curve::from_points(points, kind);
        let (_, end) = curve.domain().unwrap();
        let is_out_of_range = matches!(
            curve.calculate_point(end + overshoot),
            Err(SteerError::TimeOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn before_start_is_out_of_range(points in control_points(), kind in kind(), undershoot in 1e-6f64..100.0) {
        let curve = Curve::from_points(points, kind);
        let (start, _) = curve.domain().unwrap();
        let is_out_of_range = matches!(
            curve.calculate_point(start - undershoot),
            Err(SteerError::TimeOutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn single_point_never_evaluates(x in -10.0f64..10.0, t in -10.0f64..10.0, kind in kind()) {
        let curve = Curve::new(ControlPoint::at(DVec2::new(x, x), 0.0), kind);
        prop_assert_eq!(
            curve.calculate_point(t),
            Err(SteerError::InsufficientPoints { count: 1 })
        );
    }
}
