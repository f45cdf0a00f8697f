//! HTTP endpoints for the routecast service
//!
//! Three POST endpoints: `/weather` runs the core pipeline (trace, sample,
//! weather fan-out) over a posted route, `/directions` and
//! `/autoCompleteSuggestions` proxy the maps backend. Input problems are
//! rejected with 400 before the pipeline runs; core failures map to generic
//! server errors so upstream details never leak to the client.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::autocomplete::{AutocompleteProvider, GooglePlacesClient};
use crate::config::RouteCastConfig;
use crate::directions::{DirectionsProvider, GoogleDirectionsClient};
use crate::error::RouteCastError;
use crate::models::{CoordinateWeather, Route, RouteBody};
use crate::sampler::sample_every_meters;
use crate::trace::build_trace;
use crate::weather::{OpenWeatherClient, fetch_route_weather};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared clients and settings for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub directions: Arc<GoogleDirectionsClient>,
    pub autocomplete: Arc<GooglePlacesClient>,
    pub weather: Arc<OpenWeatherClient>,
    pub sample_interval_meters: f64,
}

impl AppState {
    /// Builds all upstream clients over one shared connection pool.
    pub fn new(config: &RouteCastConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            directions: Arc::new(GoogleDirectionsClient::new(
                client.clone(),
                config.maps_backend_key.clone(),
            )),
            autocomplete: Arc::new(GooglePlacesClient::new(
                client.clone(),
                config.maps_backend_key.clone(),
            )),
            weather: Arc::new(OpenWeatherClient::new(client, config.weather_key.clone())),
            sample_interval_meters: config.sample_interval_meters,
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct WeatherInput {
    #[serde(default)]
    pub routes: Vec<RouteBody>,
    #[serde(rename = "departureTime")]
    pub departure_time: String,
}

#[derive(Serialize, Deserialize)]
pub struct RoutePoints {
    pub origin: String,
    pub destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceAutocompleteInput {
    #[serde(rename = "placeToAutoComplete")]
    pub place_to_auto_complete: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", post(get_weather))
        .route("/directions", post(get_directions))
        .route("/autoCompleteSuggestions", post(get_autocomplete_suggestions))
        .with_state(state)
}

type ApiError = (StatusCode, Json<Value>);

fn reply(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

async fn get_weather(
    State(state): State<AppState>,
    Json(input): Json<WeatherInput>,
) -> Result<Json<Vec<CoordinateWeather>>, ApiError> {
    let departure = input
        .departure_time
        .parse::<DateTime<Utc>>()
        .map_err(|_| reply(StatusCode::BAD_REQUEST, "Unable to decode departure time"))?;

    if input.routes.is_empty() {
        return Err(reply(StatusCode::BAD_REQUEST, "No routes provided"));
    }
    let routes: Vec<Route> = input.routes.into_iter().map(Route::from).collect();

    let trace = build_trace(&routes, departure).map_err(|err| {
        error!("Unable to retrieve coordinates for the given route: {}", err);
        reply(
            status_for(&err),
            "Unable to retrieve coordinates for the given route",
        )
    })?;

    let samples = sample_every_meters(&trace, state.sample_interval_meters);

    let weather = fetch_route_weather(&samples, state.weather.as_ref())
        .await
        .map_err(|err| {
            warn!("Unable to retrieve weather data for coordinate: {}", err);
            reply(status_for(&err), "Unable to retrieve weather data for coordinate")
        })?;

    Ok(Json(weather))
}

async fn get_directions(
    State(state): State<AppState>,
    Json(points): Json<RoutePoints>,
) -> Result<Json<Value>, ApiError> {
    let routes = state
        .directions
        .routes(&points.origin, &points.destination)
        .await
        .map_err(|err| {
            error!("Unable to get directions: {}", err);
            reply(status_for(&err), "Unable to get directions")
        })?;

    Ok(Json(json!({ "routes": routes, "travelMode": "DRIVING" })))
}

async fn get_autocomplete_suggestions(
    State(state): State<AppState>,
    Json(input): Json<PlaceAutocompleteInput>,
) -> Result<Json<Vec<String>>, ApiError> {
    let suggestions = state
        .autocomplete
        .suggestions(&input.place_to_auto_complete)
        .await
        .map_err(|err| {
            error!("Unable to use autocomplete client: {}", err);
            reply(status_for(&err), "Unable to use autocomplete client")
        })?;

    Ok(Json(suggestions))
}

fn status_for(err: &RouteCastError) -> StatusCode {
    match err {
        RouteCastError::Input { .. } => StatusCode::BAD_REQUEST,
        RouteCastError::WeatherFetch { .. } => StatusCode::SERVICE_UNAVAILABLE,
        RouteCastError::Decode { .. } | RouteCastError::Api { .. } | RouteCastError::Config { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
