//! `RouteCast` - weather along a driving route
//!
//! Takes a computed driving route and a departure time, projects the
//! estimated arrival time at every point of the route geometry, down-samples
//! the result to roughly one point every few miles of travel, and fetches the
//! forecast matching each sampled point's arrival hour.

pub mod api;
pub mod autocomplete;
pub mod config;
pub mod directions;
pub mod error;
pub mod geodesy;
pub mod models;
pub mod polyline;
pub mod sampler;
pub mod trace;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::RouteCastConfig;
pub use error::RouteCastError;
pub use models::{Coordinate, CoordinateWeather, Route, TimedPoint, Weather};
pub use sampler::sample_every_meters;
pub use trace::build_trace;
pub use weather::{WeatherLookup, fetch_route_weather};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RouteCastError>;
