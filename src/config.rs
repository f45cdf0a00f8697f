//! Configuration for the routecast service
//!
//! Everything comes from the process environment once at startup and is
//! passed by value into service construction; there is no process-wide
//! mutable configuration.

use anyhow::{Result, bail};
use std::env;

/// Five miles, the sampling interval for drive forecasts
const DEFAULT_SAMPLE_INTERVAL_METERS: f64 = 8_046.72;
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct RouteCastConfig {
    /// Google Maps backend key (directions and autocomplete)
    pub maps_backend_key: String,
    /// OpenWeather API key
    pub weather_key: String,
    /// HTTP listen port
    pub port: u16,
    /// Target spacing between weather samples along the route
    pub sample_interval_meters: f64,
}

impl RouteCastConfig {
    /// Loads configuration from the process environment.
    ///
    /// The server refuses to start when neither the `MAPS_BACKEND` nor the
    /// `WEATHER` key is present.
    pub fn from_env() -> Result<Self> {
        let maps_backend_key = env::var("MAPS_BACKEND").unwrap_or_default();
        let weather_key = env::var("WEATHER").unwrap_or_default();
        if maps_backend_key.is_empty() && weather_key.is_empty() {
            bail!("Maps or weather API key is not present");
        }

        let port = match env::var("PORT") {
            Ok(raw) if !raw.is_empty() => match raw.parse() {
                Ok(port) => port,
                Err(_) => bail!("PORT must be a valid port number, got {raw:?}"),
            },
            _ => DEFAULT_PORT,
        };

        let config = Self {
            maps_backend_key,
            weather_key,
            port,
            sample_interval_meters: DEFAULT_SAMPLE_INTERVAL_METERS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects obviously unusable settings
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_meters <= 0.0 {
            bail!("Sample interval must be positive");
        }
        Ok(())
    }
}
