//! Error types and handling for the routecast service

use thiserror::Error;

use crate::polyline::PolylineError;

/// Main error type for the routecast service
#[derive(Error, Debug)]
pub enum RouteCastError {
    /// A step's polyline could not be decoded; the whole trace build is
    /// aborted and no partial trace is produced
    #[error("unable to decode polyline in leg {leg}, step {step}: {source}")]
    Decode {
        leg: usize,
        step: usize,
        #[source]
        source: PolylineError,
    },

    /// A per-point weather lookup failed; the whole fan-out is aborted and no
    /// partial result is returned
    #[error("weather fetch error: {message}")]
    WeatherFetch { message: String },

    /// Maps backend (directions / autocomplete) communication errors
    #[error("maps API error: {message}")]
    Api { message: String },

    /// Malformed request input, rejected before the core pipeline runs
    #[error("invalid input: {message}")]
    Input { message: String },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl RouteCastError {
    /// Create a new weather fetch error
    pub fn weather_fetch<S: Into<String>>(message: S) -> Self {
        Self::WeatherFetch {
            message: message.into(),
        }
    }

    /// Create a new maps API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new input validation error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
