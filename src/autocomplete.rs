//! Place autocomplete collaborator
//!
//! Fetches address suggestions for a partial place string from the Google
//! Place Autocomplete API, restricted to US addresses, and reduces the
//! predictions to their description strings.

use serde::Deserialize;
use tracing::instrument;

use crate::Result;
use crate::error::RouteCastError;

/// Suggestion source for a partial place string
pub trait AutocompleteProvider {
    async fn suggestions(&self, partial: &str) -> Result<Vec<String>>;
}

pub struct GooglePlacesClient {
    client: reqwest::Client,
    api_key: String,
}

impl GooglePlacesClient {
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
}

impl AutocompleteProvider for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn suggestions(&self, partial: &str) -> Result<Vec<String>> {
        let url = format!(
            "https://maps.googleapis.com/maps/api/place/autocomplete/json?input={}&types=address&components=country:us&key={}",
            urlencoding::encode(partial),
            self.api_key
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RouteCastError::api(format!("autocomplete request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteCastError::api(format!(
                "autocomplete upstream returned {status}"
            )));
        }

        let body: AutocompleteResponse = response.json().await.map_err(|err| {
            RouteCastError::api(format!("invalid autocomplete response: {err}"))
        })?;

        Ok(body
            .predictions
            .into_iter()
            .map(|prediction| prediction.description)
            .collect())
    }
}
