//! Directions collaborator
//!
//! Turns an origin/destination pair into drivable routes via the Google
//! Directions API. The route payload is passed through as raw JSON: the
//! frontend renders it and posts the same shape back to the weather endpoint,
//! so nothing here needs to interpret the geometry.

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::Result;
use crate::error::RouteCastError;

/// Route source for an origin/destination pair
pub trait DirectionsProvider {
    async fn routes(&self, origin: &str, destination: &str) -> Result<Value>;
}

pub struct GoogleDirectionsClient {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleDirectionsClient {
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<Value>,
}

impl DirectionsProvider for GoogleDirectionsClient {
    #[instrument(skip(self))]
    async fn routes(&self, origin: &str, destination: &str) -> Result<Value> {
        let url = format!(
            "https://maps.googleapis.com/maps/api/directions/json?origin={}&destination={}&mode=driving&key={}",
            urlencoding::encode(origin),
            urlencoding::encode(destination),
            self.api_key
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RouteCastError::api(format!("directions request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteCastError::api(format!(
                "directions upstream returned {status}"
            )));
        }

        let body: DirectionsResponse = response.json().await.map_err(|err| {
            RouteCastError::api(format!("invalid directions response: {err}"))
        })?;

        // Request-level failures come back in-band with a 200.
        if body.status != "OK" && body.status != "ZERO_RESULTS" {
            return Err(RouteCastError::api(format!(
                "directions request rejected: {}",
                body.status
            )));
        }

        Ok(Value::Array(body.routes))
    }
}
