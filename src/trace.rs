//! Route geometry to time-stamped trace
//!
//! Walks the first route's legs and steps in document order, decodes every
//! polyline, and stamps each decoded coordinate with the estimated arrival
//! time at the start of its step. The time cursor starts at the departure
//! time and advances by each processed step's duration; all points of one
//! step share the step's start time.

use chrono::{DateTime, Duration, Utc};

use crate::Result;
use crate::error::RouteCastError;
use crate::models::{LeafStep, Route, Step, TimedPoint};
use crate::polyline;

/// Builds the full-resolution timed trace for the first route in `routes`.
///
/// Additional routes are ignored. A route with no legs yields an empty trace.
/// Any polyline that fails to decode aborts the build; no partial trace is
/// returned.
pub fn build_trace(routes: &[Route], departure: DateTime<Utc>) -> Result<Vec<TimedPoint>> {
    let mut points = Vec::new();
    let mut cursor = departure;

    let Some(route) = routes.first() else {
        return Ok(points);
    };

    for (leg_index, leg) in route.legs.iter().enumerate() {
        for (step_index, step) in leg.steps.iter().enumerate() {
            match step {
                Step::Leaf(leaf) => {
                    append_stretch(leaf, &mut cursor, &mut points, leg_index, step_index)?;
                }
                Step::Composite(sub_steps) => {
                    // The parent step's own duration never applies here.
                    for sub in sub_steps {
                        append_stretch(sub, &mut cursor, &mut points, leg_index, step_index)?;
                    }
                }
            }
        }
    }
    Ok(points)
}

/// Decodes one stretch, stamps its points with the current cursor, then
/// advances the cursor by the stretch duration.
fn append_stretch(
    stretch: &LeafStep,
    cursor: &mut DateTime<Utc>,
    points: &mut Vec<TimedPoint>,
    leg: usize,
    step: usize,
) -> Result<()> {
    let coords = polyline::decode(&stretch.polyline).map_err(|source| {
        tracing::warn!("Unable to decode polyline in leg {}, step {}: {}", leg, step, source);
        RouteCastError::Decode { leg, step, source }
    })?;

    let stamp = *cursor;
    points.extend(coords.into_iter().map(|coord| TimedPoint::new(coord, stamp)));
    *cursor += Duration::seconds(i64::try_from(stretch.duration_secs).unwrap_or(i64::MAX));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Leg};

    fn departure() -> DateTime<Utc> {
        "2026-08-08T06:00:00Z".parse().unwrap()
    }

    fn leaf(coords: &[Coordinate], duration_secs: u64) -> Step {
        Step::Leaf(LeafStep::new(polyline::encode(coords), duration_secs))
    }

    fn route(steps: Vec<Step>) -> Route {
        Route {
            legs: vec![Leg { steps }],
        }
    }

    #[test]
    fn test_empty_route_list_yields_empty_trace() {
        let trace = build_trace(&[], departure()).unwrap();
        assert!(trace.is_empty());
    }

    #[test]
    fn test_route_without_legs_yields_empty_trace() {
        let trace = build_trace(&[Route { legs: vec![] }], departure()).unwrap();
        assert!(trace.is_empty());
    }

    #[test]
    fn test_single_step_points_share_departure_time() {
        let coords = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.1),
            Coordinate::new(0.0, 0.2),
        ];
        let trace = build_trace(&[route(vec![leaf(&coords, 600)])], departure()).unwrap();

        assert_eq!(trace.len(), 3);
        for point in &trace {
            assert_eq!(point.time, departure());
        }
    }

    #[test]
    fn test_cursor_advances_between_steps() {
        let first = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.1)];
        let second = [Coordinate::new(0.0, 0.1), Coordinate::new(0.0, 0.2)];
        let steps = vec![leaf(&first, 600), leaf(&second, 300)];

        let trace = build_trace(&[route(steps)], departure()).unwrap();

        assert_eq!(trace.len(), 4);
        assert_eq!(trace[0].time, departure());
        assert_eq!(trace[1].time, departure());
        // The second step starts 600s in.
        assert_eq!(trace[2].time, departure() + Duration::seconds(600));
        assert_eq!(trace[3].time, departure() + Duration::seconds(600));
    }

    #[test]
    fn test_substep_durations_replace_parent_duration() {
        let a = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.1)];
        let b = [Coordinate::new(0.0, 0.1), Coordinate::new(0.0, 0.2)];
        let tail = [Coordinate::new(0.0, 0.2), Coordinate::new(0.0, 0.3)];

        // A composite never carries its parent's 9999s duration at this
        // layer; only the 100s + 200s sub-steps advance the cursor.
        let composite = Step::Composite(vec![
            LeafStep::new(polyline::encode(&a), 100),
            LeafStep::new(polyline::encode(&b), 200),
        ]);
        let steps = vec![composite, leaf(&tail, 60)];

        let trace = build_trace(&[route(steps)], departure()).unwrap();

        assert_eq!(trace.len(), 6);
        assert_eq!(trace[0].time, departure());
        assert_eq!(trace[2].time, departure() + Duration::seconds(100));
        // The trailing step starts exactly 300s in, never 9999s.
        assert_eq!(trace[4].time, departure() + Duration::seconds(300));
    }

    #[test]
    fn test_only_first_route_is_consumed() {
        let first = route(vec![leaf(&[Coordinate::new(1.0, 1.0)], 60)]);
        let second = route(vec![leaf(
            &[Coordinate::new(2.0, 2.0), Coordinate::new(3.0, 3.0)],
            60,
        )]);

        let trace = build_trace(&[first, second], departure()).unwrap();

        assert_eq!(trace.len(), 1);
        assert!((trace[0].coord.latitude - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_failure_aborts_whole_build() {
        let good = leaf(&[Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.1)], 60);
        let bad = Step::Leaf(LeafStep::new("~", 60));

        let err = build_trace(&[route(vec![good, bad])], departure()).unwrap_err();

        assert!(matches!(
            err,
            RouteCastError::Decode { leg: 0, step: 1, .. }
        ));
    }
}
