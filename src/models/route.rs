//! Route geometry as supplied by the directions backend
//!
//! Two layers live here. The `*Body` structs mirror the Directions JSON the
//! frontend round-trips back to us: steps carry an encoded polyline, a
//! duration in seconds, and a possibly-empty list of nested sub-steps. The
//! domain types convert that nullable-list shape into a tagged
//! [`Step::Leaf`] / [`Step::Composite`] union, so the rule that a parent
//! step's own polyline and duration are ignored whenever sub-steps are
//! present holds by construction.

use serde::{Deserialize, Serialize};

/// Encoded polyline wrapper as it appears in the Directions JSON
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EncodedPolyline {
    pub points: String,
}

/// Travel time wrapper; `value` is in seconds
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DurationValue {
    pub value: u64,
}

/// One route as posted to the weather endpoint
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RouteBody {
    #[serde(default)]
    pub legs: Vec<LegBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LegBody {
    #[serde(default)]
    pub steps: Vec<StepBody>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StepBody {
    #[serde(default)]
    pub polyline: EncodedPolyline,
    #[serde(default)]
    pub duration: DurationValue,
    /// Nested sub-steps; when non-empty they supersede this step's own
    /// polyline and duration entirely
    #[serde(default)]
    pub steps: Vec<StepBody>,
}

/// A drivable stretch with its own geometry and travel time
#[derive(Debug, Clone, PartialEq)]
pub struct LeafStep {
    /// Encoded polyline for this stretch
    pub polyline: String,
    /// Travel time across this stretch in seconds
    pub duration_secs: u64,
}

impl LeafStep {
    #[must_use]
    pub fn new(polyline: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            polyline: polyline.into(),
            duration_secs,
        }
    }
}

/// A step as the trace builder consumes it
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A plain step: its polyline is the geometry, its duration advances the
    /// time cursor
    Leaf(LeafStep),
    /// A parent step whose sub-steps carry all geometry and timing; the
    /// parent's own polyline and duration do not exist at this layer
    Composite(Vec<LeafStep>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub legs: Vec<Leg>,
}

impl From<StepBody> for Step {
    fn from(body: StepBody) -> Self {
        if body.steps.is_empty() {
            Step::Leaf(LeafStep::new(body.polyline.points, body.duration.value))
        } else {
            // The Directions API nests one level deep; sub-steps are leaves.
            Step::Composite(
                body.steps
                    .into_iter()
                    .map(|sub| LeafStep::new(sub.polyline.points, sub.duration.value))
                    .collect(),
            )
        }
    }
}

impl From<LegBody> for Leg {
    fn from(body: LegBody) -> Self {
        Leg {
            steps: body.steps.into_iter().map(Step::from).collect(),
        }
    }
}

impl From<RouteBody> for Route {
    fn from(body: RouteBody) -> Self {
        Route {
            legs: body.legs.into_iter().map(Leg::from).collect(),
        }
    }
}
