//! Trip planner
//!
//! Single entry point combining the weather summarizer, the packing rules
//! engine and the narrative generator into one [`TripPlan`].

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::models::{DailyReading, PackingPlan, TemperatureTolerance, TripWindow, WeatherReport};
use crate::{narrative, packing, weather};

/// Everything returned to a caller for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Aggregate weather, rounded for display
    pub weather: WeatherReport,
    /// Tolerance-aware one-line outlook
    pub summary_line: String,
    pub tolerance: TemperatureTolerance,
    pub trip_days: u32,
    pub packing: PackingPlan,
}

/// Compute the full plan for a trip to `city`
///
/// Fails with `InvalidTripWindow` when the window ends before it starts and
/// with `InsufficientData` when no reading has both temperatures.
#[instrument(skip(readings), fields(reading_count = readings.len()))]
pub fn compute_plan(
    city: &str,
    readings: &[DailyReading],
    tolerance: TemperatureTolerance,
    window: TripWindow,
) -> crate::Result<TripPlan> {
    window.validate()?;
    let trip_days = window.trip_days();
    let aggregate = weather::summarize(city, readings)?;

    let mut packing = packing::compute_packing_list(&aggregate, tolerance, trip_days)?;
    packing.notes = narrative::notes(&aggregate, tolerance);

    info!(
        trip_days,
        tops = packing.tops.total,
        bottoms = packing.bottoms.total,
        outerwear = packing.outerwear.len(),
        "Computed packing plan"
    );

    Ok(TripPlan {
        weather: WeatherReport::from(&aggregate),
        summary_line: narrative::summary_line(&aggregate, tolerance).to_string(),
        tolerance,
        trip_days,
        packing,
    })
}
