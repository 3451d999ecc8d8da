//! Converting curves to polylines for playback and visualization.

use steerpath_core::{Result, SteerError};
use steerpath_math::VectorSpace;

use crate::curve::Curve;
use crate::kernel::Segment;

/// Sample the curve at a fixed time step.
///
/// Samples start at the first control point's time, advance by `window`, and
/// always finish exactly on the last control point's time. Fails with
/// [`SteerError::InvalidConfiguration`] if that would take more than
/// [`MAX_SAMPLES`] samples.
pub fn sample_uniform<P: VectorSpace>(curve: &Curve<P>, window: f64) -> Result<Vec<P>> {
    if !(window.is_finite() && window > 0.0) {
        return Err(SteerError::InvalidConfiguration(format!(
            "sampling window must be finite and positive, got {window}"
        )));
    }
    let (start, end) = robust_domain(curve)?;

    let steps = ((end - start) / window).ceil();
    if !steps.is_finite() || steps + 1.0 > MAX_SAMPLES as f64 {
        return Err(SteerError::InvalidConfiguration(format!(
            "sampling window {window} over [{start}, {end}] exceeds {MAX_SAMPLES} samples"
        )));
    }
    let steps = steps as usize;

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        let t = start + window * i as f64;
        if t >= end {
            break;
        }
        points.push(curve.calculate_point(t)?);
    }
    points.push(curve.calculate_point(end)?);
    Ok(points)
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Each interval between control points is subdivided recursively while the
/// midpoint deviates from the chord by more than `tolerance`, floored at the
/// curve's linear tolerance. Control points are always part of the output.
///
/// Every interval is evaluated on its own cubic piece. Where equal-time control
/// points break the path, the polyline holds both positions back to back.
pub fn curve_to_polyline<P: VectorSpace>(curve: &Curve<P>, tolerance: f64) -> Result<Vec<P>> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(SteerError::InvalidConfiguration(format!(
            "polyline tolerance must be finite and positive, got {tolerance}"
        )));
    }
    let (start, end) = robust_domain(curve)?;
    let limits = curve.config().tolerance;
    let tolerance = tolerance.max(limits.linear);

    let control_points = curve.control_points();
    let mut points = Vec::new();
    let mut joined = false;
    for next in 1..control_points.len() {
        let (t0, t1) = (control_points[next - 1].time, control_points[next].time);
        if limits.is_degenerate_span(t1 - t0) {
            joined = false;
            continue;
        }
        let segment = curve.kind().segment(control_points, next);
        if !joined {
            points.push(segment.position(t0));
        }
        subdivide_segment(&segment, t0, t1, tolerance, &mut points, 0);
        joined = true;
    }

    if points.is_empty() {
        return Err(SteerError::DegenerateInterval {
            time: start,
            start,
            end,
        });
    }
    Ok(points)
}

/// Maximum number of samples [`sample_uniform`] will produce.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Every interval is split at least this many times, so S-shaped pieces whose
/// midpoint lies on the chord are still refined.
const MIN_DEPTH: u32 = 2;

fn subdivide_segment<P: VectorSpace>(
    segment: &Segment<P>,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<P>,
    depth: u32,
) {
    let p1 = segment.position(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = segment.position(t0);
    let p_mid = segment.position(t_mid);

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = p_mid.distance(chord_mid);

    if depth < MIN_DEPTH || deviation > tolerance {
        subdivide_segment(segment, t0, t_mid, tolerance, points, depth + 1);
        subdivide_segment(segment, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

fn robust_domain<P: VectorSpace>(curve: &Curve<P>) -> Result<(f64, f64)> {
    match curve.domain() {
        Some(domain) if curve.check_robust() => Ok(domain),
        _ => Err(SteerError::InsufficientPoints { count: curve.len() }),
    }
}
