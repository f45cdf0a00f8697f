//! Distance-based down-sampling of a timed trace
//!
//! Reduces the full-resolution trace to roughly one point per target
//! interval of travel. Interior samples are back-solved anchors: when the
//! accumulated distance first reaches the interval, the anchor is the point
//! exactly `overshoot` meters behind the current trace point along the
//! current heading, so consecutive anchors are the interval apart in
//! cumulative travel.

use crate::geodesy;
use crate::models::TimedPoint;

/// Down-samples `trace` to approximately one point every `interval_meters`.
///
/// The trace's first point is always the first sample, and for traces of two
/// or more points the trace's last point is always the final sample, without
/// deduplication against the last interior anchor. Distance accumulation only
/// happens for traces of more than two points. An empty trace produces an
/// empty sample set; callers are expected to reject empty routes upstream.
#[must_use]
pub fn sample_every_meters(trace: &[TimedPoint], interval_meters: f64) -> Vec<TimedPoint> {
    let Some(&first) = trace.first() else {
        return Vec::new();
    };
    let mut samples = vec![first];

    if trace.len() > 2 {
        let mut accumulated = 0.0;
        let mut prev = first;

        for &point in &trace[1..] {
            accumulated += geodesy::distance_meters(prev.coord, point.coord);
            if accumulated < interval_meters {
                prev = point;
                continue;
            }

            let overshoot = accumulated - interval_meters;
            let heading = geodesy::heading_degrees(prev.coord, point.coord);
            // Degenerate geometry has no solvable origin; fall back to the
            // trace point itself.
            let anchor = geodesy::offset_origin(point.coord, overshoot, heading)
                .map_or(point, |coord| TimedPoint::new(coord, point.time));

            accumulated = 0.0;
            prev = anchor;
            samples.push(anchor);
        }
    }

    if trace.len() >= 2 {
        samples.push(trace[trace.len() - 1]);
    }
    samples
}
