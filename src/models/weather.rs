//! Weather reading, aggregate and report models

use serde::{Deserialize, Serialize};

/// Relative humidity assumed when no reading carries one
pub const DEFAULT_HUMIDITY: f64 = 65.0;

/// One calendar day of forecast data
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DailyReading {
    /// Daily maximum temperature in Celsius
    pub max_temp: Option<f64>,
    /// Daily minimum temperature in Celsius
    pub min_temp: Option<f64>,
    /// Maximum precipitation probability for the day (0-100)
    pub precip_probability: Option<f64>,
    /// Mean relative humidity for the day (0-100)
    #[serde(default)]
    pub humidity: Option<f64>,
}

impl DailyReading {
    #[must_use]
    pub fn new(max_temp: f64, min_temp: f64, precip_probability: f64) -> Self {
        Self {
            max_temp: Some(max_temp),
            min_temp: Some(min_temp),
            precip_probability: Some(precip_probability),
            humidity: None,
        }
    }

    /// Both temperature bounds, if present
    #[must_use]
    pub fn temperatures(&self) -> Option<(f64, f64)> {
        Some((self.max_temp?, self.min_temp?))
    }
}

/// Multi-day forecast reduced to single values
///
/// Temperatures are kept at full precision; rounding only happens when the
/// aggregate is turned into a [`WeatherReport`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherAggregate {
    pub city: String,
    /// Mean of the daily midpoints
    pub avg: f64,
    /// Lowest daily minimum
    pub min: f64,
    /// Highest daily maximum
    pub max: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Mean precipitation probability percentage
    pub rain_chance: f64,
    pub summary: String,
}

/// Aggregate rounded for display
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub avg: i64,
    pub min: i64,
    pub max: i64,
    pub humidity: i64,
    pub rain_chance: i64,
    pub summary: String,
}

impl From<&WeatherAggregate> for WeatherReport {
    fn from(aggregate: &WeatherAggregate) -> Self {
        Self {
            city: aggregate.city.clone(),
            avg: round_half_up(aggregate.avg),
            min: round_half_up(aggregate.min),
            max: round_half_up(aggregate.max),
            humidity: round_half_up(aggregate.humidity),
            rain_chance: round_half_up(aggregate.rain_chance),
            summary: aggregate.summary.clone(),
        }
    }
}

/// Round to the nearest integer, halves towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Open-Meteo daily forecast block and its conversion into readings
pub mod open_meteo {
    use super::DailyReading;
    use serde::{Deserialize, Serialize};

    /// `daily` section of an Open-Meteo forecast response
    #[derive(Debug, Serialize, Deserialize, Clone, Default)]
    pub struct DailySeries {
        #[serde(default)]
        pub time: Vec<String>,
        #[serde(default)]
        pub temperature_2m_max: Vec<Option<f64>>,
        #[serde(default)]
        pub temperature_2m_min: Vec<Option<f64>>,
        #[serde(default)]
        pub precipitation_probability_max: Vec<Option<f64>>,
        #[serde(default)]
        pub relative_humidity_2m_mean: Option<Vec<Option<f64>>>,
    }

    impl DailySeries {
        /// Zip the parallel arrays into one reading per day
        ///
        /// The longest array decides the day count; short arrays yield `None`.
        #[must_use]
        pub fn into_readings(self) -> Vec<DailyReading> {
            let days = self
                .time
                .len()
                .max(self.temperature_2m_max.len())
                .max(self.temperature_2m_min.len())
                .max(self.precipitation_probability_max.len());

            let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();
            let humidity = self.relative_humidity_2m_mean.unwrap_or_default();

            (0..days)
                .map(|i| DailyReading {
                    max_temp: at(&self.temperature_2m_max, i),
                    min_temp: at(&self.temperature_2m_min, i),
                    precip_probability: at(&self.precipitation_probability_max, i),
                    humidity: at(&humidity, i),
                })
                .collect()
        }
    }
}
