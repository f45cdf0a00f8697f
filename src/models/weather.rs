//! Weather values attached to sampled route points

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Weather at a point, reduced to what the route view renders
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Weather {
    /// Temperature in the upstream unit (imperial as requested)
    pub temperature: f64,
    /// Probability of precipitation, 0.0..=1.0
    #[serde(rename = "precipChance")]
    pub precip_chance: f64,
    /// Condition icon code from the weather provider
    #[serde(rename = "weatherIcon")]
    pub icon: String,
}

/// A sampled route point paired with its forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CoordinateWeather {
    #[serde(rename = "coordinate")]
    pub coord: Coordinate,
    #[serde(rename = "weatherData")]
    pub weather: Weather,
    /// Estimated arrival time the forecast was matched against (UTC)
    pub time: DateTime<Utc>,
}
