//! `TravelPack` - Weather-aware packing list planner
//!
//! This library turns a trip's daily forecast readings, its date range and
//! the traveller's temperature tolerance into a concrete packing plan.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod narrative;
pub mod packing;
pub mod planner;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::TravelPackConfig;
pub use error::TravelPackError;
pub use models::{
    DailyReading, PackingItem, PackingPlan, TemperatureTolerance, TripWindow, WeatherAggregate,
    WeatherReport,
};
pub use packing::compute_packing_list;
pub use planner::{TripPlan, compute_plan};
pub use weather::summarize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelPackError>;
