//! Data models for the routecast service
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates and time-stamped route points
//! - Route: the leg/step geometry a directions backend hands us
//! - Weather: per-point forecast values and the final response shape

pub mod location;
pub mod route;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinate, TimedPoint};
pub use route::{LeafStep, Leg, Route, RouteBody, Step};
pub use weather::{CoordinateWeather, Weather};
