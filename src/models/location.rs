//! Coordinate and timed route point models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point on the Earth's surface
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A coordinate stamped with the estimated moment the traveler passes it
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TimedPoint {
    pub coord: Coordinate,
    /// Estimated arrival time at this coordinate (UTC)
    #[serde(rename = "timeAtCoord")]
    pub time: DateTime<Utc>,
}

impl TimedPoint {
    #[must_use]
    pub fn new(coord: Coordinate, time: DateTime<Utc>) -> Self {
        Self { coord, time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_wire_names() {
        let coord = Coordinate::new(40.7128, -74.006);
        let json = serde_json::to_value(coord).unwrap();
        assert_eq!(json["lat"], 40.7128);
        assert_eq!(json["lng"], -74.006);
    }

    #[test]
    fn test_timed_point_wire_names() {
        let time = "2026-08-08T14:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let point = TimedPoint::new(Coordinate::new(1.0, 2.0), time);
        let json = serde_json::to_value(point).unwrap();
        assert!(json.get("coord").is_some());
        assert_eq!(json["timeAtCoord"], "2026-08-08T14:30:00Z");
    }
}
