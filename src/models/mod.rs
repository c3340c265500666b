//! Data models for the TravelPack planner
//!
//! This module contains the domain models organized by concern:
//! - Weather: daily readings, the aggregate and its rounded report
//! - Trip: temperature tolerance and the travel date window
//! - Packing: the recommended packing plan

pub mod packing;
pub mod trip;
pub mod weather;

// Re-export all public types for convenient access
pub use packing::{Bottoms, PackingItem, PackingPlan, Tops};
pub use trip::{PerceivedTemperatures, TemperatureTolerance, TripWindow};
pub use weather::{DEFAULT_HUMIDITY, DailyReading, WeatherAggregate, WeatherReport};
