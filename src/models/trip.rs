//! Trip inputs: temperature tolerance and date window

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::TravelPackError;
use crate::models::WeatherAggregate;

/// How the traveller experiences temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureTolerance {
    /// Rules evaluate forecast temperatures shifted up by two degrees
    ColdSensitive,
    Neutral,
    /// Rules evaluate forecast temperatures shifted down by two degrees
    HeatSensitive,
}

impl TemperatureTolerance {
    /// Degrees added to a forecast temperature before rule evaluation
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            TemperatureTolerance::ColdSensitive => 2.0,
            TemperatureTolerance::Neutral => 0.0,
            TemperatureTolerance::HeatSensitive => -2.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureTolerance::ColdSensitive => "cold-sensitive",
            TemperatureTolerance::Neutral => "neutral",
            TemperatureTolerance::HeatSensitive => "heat-sensitive",
        }
    }

    /// Perceived view of an aggregate's temperatures
    #[must_use]
    pub fn perceive(self, aggregate: &WeatherAggregate) -> PerceivedTemperatures {
        let offset = self.offset();
        PerceivedTemperatures {
            avg: aggregate.avg + offset,
            min: aggregate.min + offset,
            max: aggregate.max + offset,
        }
    }
}

impl fmt::Display for TemperatureTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureTolerance {
    type Err = TravelPackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "cold-sensitive" => Ok(TemperatureTolerance::ColdSensitive),
            "neutral" => Ok(TemperatureTolerance::Neutral),
            "heat-sensitive" => Ok(TemperatureTolerance::HeatSensitive),
            _ => Err(TravelPackError::invalid_tolerance(s)),
        }
    }
}

/// Aggregate temperatures shifted by a tolerance offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceivedTemperatures {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Inclusive travel date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripWindow {
    /// Create a window, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> crate::Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Fails when the end date comes before the start date
    pub fn validate(&self) -> crate::Result<()> {
        if self.end < self.start {
            return Err(TravelPackError::invalid_trip_window(
                "End date must be after start date",
            ));
        }
        Ok(())
    }

    /// Inclusive number of days; 0 for an inverted window
    #[must_use]
    pub fn trip_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}
