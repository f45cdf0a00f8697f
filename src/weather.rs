//! Weather lookup collaborator and the per-route fan-out aggregator
//!
//! One hourly-forecast lookup runs per sampled point, all concurrently. The
//! aggregator is fail-fast: any lookup error aborts the whole call and no
//! partial results are returned. Results keep the sample order.

use chrono::{DateTime, Timelike, Utc};
use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::RouteCastError;
use crate::models::{Coordinate, CoordinateWeather, TimedPoint, Weather};

/// One hour of forecast for a coordinate
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HourlyForecast {
    /// Forecast hour as Unix epoch seconds (UTC)
    pub dt: i64,
    pub temp: f64,
    /// Probability of precipitation, 0.0..=1.0
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WeatherCondition {
    pub icon: String,
}

/// Hourly forecast source for a coordinate
pub trait WeatherLookup {
    async fn hourly_forecast(&self, coord: Coordinate) -> Result<Vec<HourlyForecast>>;
}

/// OpenWeather One Call client
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenWeatherClient {
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    hourly: Vec<HourlyForecast>,
}

impl WeatherLookup for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn hourly_forecast(&self, coord: Coordinate) -> Result<Vec<HourlyForecast>> {
        let url = format!(
            "https://api.openweathermap.org/data/2.5/onecall?units=imperial&lat={}&lon={}&exclude=current,minutely,daily,alerts&appid={}",
            coord.latitude, coord.longitude, self.api_key
        );

        let response = self.client.get(url).send().await.map_err(|err| {
            RouteCastError::weather_fetch(format!("request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteCastError::weather_fetch(format!(
                "upstream returned {status}"
            )));
        }

        let body: OneCallResponse = response.json().await.map_err(|err| {
            RouteCastError::weather_fetch(format!("invalid response body: {err}"))
        })?;
        Ok(body.hourly)
    }
}

/// Fetches the forecast for every sampled point concurrently and pairs each
/// point with the hourly entry matching its stamped hour.
///
/// All lookups run to completion before the first failure, if any, is
/// returned; a failed lookup fails the whole call with no partial result.
/// Points whose stamped hour has no forecast entry are dropped silently.
pub async fn fetch_route_weather<L: WeatherLookup>(
    samples: &[TimedPoint],
    lookup: &L,
) -> Result<Vec<CoordinateWeather>> {
    let outcomes = join_all(samples.iter().map(|sample| async move {
        let forecast = lookup.hourly_forecast(sample.coord).await?;
        Ok::<_, RouteCastError>(match_hour(sample, &forecast))
    }))
    .await;

    let mut results = Vec::new();
    for outcome in outcomes {
        results.extend(outcome?);
    }
    debug!(
        "Matched weather for {} of {} sampled points",
        results.len(),
        samples.len()
    );
    Ok(results)
}

/// Picks the first forecast entry whose UTC hour matches the sample's
/// stamped hour.
fn match_hour(sample: &TimedPoint, forecast: &[HourlyForecast]) -> Option<CoordinateWeather> {
    forecast.iter().find_map(|entry| {
        let entry_time = DateTime::<Utc>::from_timestamp(entry.dt, 0)?;
        (entry_time.hour() == sample.time.hour()).then(|| CoordinateWeather {
            coord: sample.coord,
            weather: Weather {
                temperature: entry.temp,
                precip_chance: entry.pop,
                icon: entry
                    .weather
                    .first()
                    .map(|condition| condition.icon.clone())
                    .unwrap_or_default(),
            },
            time: sample.time,
        })
    })
}
