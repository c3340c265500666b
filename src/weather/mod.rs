//! Weather summarizer
//!
//! Reduces a trip's daily forecast readings into a single [`WeatherAggregate`]
//! and describes it in one line of text.

use tracing::debug;

use crate::TravelPackError;
use crate::models::{DEFAULT_HUMIDITY, DailyReading, WeatherAggregate};

/// Aggregate the readings for `city`
///
/// Days missing either temperature are skipped for the temperature figures,
/// while the rain chance averages over every reading with missing values
/// counted as zero.
pub fn summarize(city: &str, readings: &[DailyReading]) -> crate::Result<WeatherAggregate> {
    let temperatures: Vec<(f64, f64)> =
        readings.iter().filter_map(DailyReading::temperatures).collect();

    if temperatures.is_empty() {
        return Err(TravelPackError::insufficient_data(format!(
            "none of the {} readings for '{}' has both a maximum and a minimum temperature",
            readings.len(),
            city
        )));
    }

    let days = temperatures.len() as f64;
    let avg = temperatures
        .iter()
        .map(|(max, min)| (max + min) / 2.0)
        .sum::<f64>()
        / days;
    let min = temperatures
        .iter()
        .map(|&(_, min)| min)
        .fold(f64::INFINITY, f64::min);
    let max = temperatures
        .iter()
        .map(|&(max, _)| max)
        .fold(f64::NEG_INFINITY, f64::max);

    let rain_chance = readings
        .iter()
        .map(|r| r.precip_probability.map_or(0.0, percentage))
        .sum::<f64>()
        / readings.len() as f64;

    let humidity_values: Vec<f64> = readings
        .iter()
        .filter_map(|r| r.humidity.map(percentage))
        .collect();
    let humidity = if humidity_values.is_empty() {
        DEFAULT_HUMIDITY
    } else {
        humidity_values.iter().sum::<f64>() / humidity_values.len() as f64
    };

    debug!(
        city,
        valid_days = temperatures.len(),
        total_days = readings.len(),
        avg,
        min,
        max,
        rain_chance,
        "Summarized forecast readings"
    );

    Ok(WeatherAggregate {
        city: city.to_string(),
        avg,
        min,
        max,
        humidity,
        rain_chance,
        summary: describe(avg, min, max, rain_chance),
    })
}

/// Clamp a reported percentage into 0..=100
fn percentage(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Describe temperature level, day/night range and rain outlook
#[must_use]
pub fn describe(avg: f64, min: f64, max: f64, rain_chance: f64) -> String {
    let mut summary = if avg < 5.0 {
        "Cold weather with freezing temperatures"
    } else if avg < 15.0 {
        "Cool weather, bring warm layers"
    } else if avg < 25.0 {
        "Mild weather, comfortable temperatures"
    } else if avg < 35.0 {
        "Warm weather, light clothing recommended"
    } else {
        "Hot weather, stay cool and hydrated"
    }
    .to_string();

    let range = max - min;
    if range > 15.0 {
        summary.push_str("; significant temperature swings between day and night");
    } else if range > 8.0 {
        summary.push_str("; moderate temperature variation");
    }

    if rain_chance > 70.0 {
        summary.push_str(". High chance of rain, pack waterproof items");
    } else if rain_chance > 40.0 {
        summary.push_str(". Moderate chance of rain, consider rain gear");
    } else if rain_chance > 20.0 {
        summary.push_str(". Low chance of rain");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn missing_min(max: f64, precip: f64) -> DailyReading {
        DailyReading {
            max_temp: Some(max),
            min_temp: None,
            precip_probability: Some(precip),
            humidity: None,
        }
    }

    #[test]
    fn test_aggregates_midpoints_and_extrema() {
        let readings = vec![
            DailyReading::new(20.0, 10.0, 10.0),
            DailyReading::new(24.0, 14.0, 30.0),
            DailyReading::new(20.0, 8.0, 50.0),
        ];
        let aggregate = summarize("Porto", &readings).unwrap();

        assert_eq!(aggregate.city, "Porto");
        assert_eq!(aggregate.avg, 16.0);
        assert_eq!(aggregate.min, 8.0);
        assert_eq!(aggregate.max, 24.0);
        assert_eq!(aggregate.rain_chance, 30.0);
        assert_eq!(aggregate.humidity, DEFAULT_HUMIDITY);
        assert!(aggregate.min <= aggregate.avg && aggregate.avg <= aggregate.max);
    }

    #[test]
    fn test_rain_chance_counts_skipped_days() {
        let readings = vec![
            DailyReading::new(20.0, 10.0, 40.0),
            missing_min(22.0, 80.0),
            DailyReading {
                precip_probability: None,
                ..DailyReading::new(20.0, 10.0, 0.0)
            },
        ];
        let aggregate = summarize("Oslo", &readings).unwrap();

        // Temperatures only see the two complete days
        assert_eq!(aggregate.max, 20.0);
        assert_eq!(aggregate.avg, 15.0);
        // Rain averages over all three, the missing value counting as zero
        assert_eq!(aggregate.rain_chance, 40.0);
    }

    #[test]
    fn test_full_precision_is_kept() {
        let readings = vec![
            DailyReading::new(21.0, 10.0, 33.0),
            DailyReading::new(22.0, 11.0, 34.0),
        ];
        let aggregate = summarize("Nice", &readings).unwrap();
        assert_eq!(aggregate.avg, 16.0);
        assert_eq!(aggregate.rain_chance, 33.5);
    }

    #[test]
    fn test_humidity_mean_when_reported() {
        let readings = vec![
            DailyReading {
                humidity: Some(80.0),
                ..DailyReading::new(30.0, 24.0, 0.0)
            },
            DailyReading {
                humidity: Some(70.0),
                ..DailyReading::new(31.0, 25.0, 0.0)
            },
            DailyReading::new(29.0, 23.0, 0.0),
        ];
        let aggregate = summarize("Bangkok", &readings).unwrap();
        assert_eq!(aggregate.humidity, 75.0);
    }

    #[test]
    fn test_out_of_range_percentages_are_clamped() {
        let readings = vec![
            DailyReading {
                humidity: Some(130.0),
                ..DailyReading::new(20.0, 10.0, 150.0)
            },
            DailyReading {
                humidity: Some(-10.0),
                ..DailyReading::new(20.0, 10.0, -20.0)
            },
        ];
        let aggregate = summarize("Lima", &readings).unwrap();
        assert_eq!(aggregate.rain_chance, 50.0);
        assert_eq!(aggregate.humidity, 50.0);
    }

    #[test]
    fn test_empty_readings_are_insufficient() {
        let err = summarize("Nowhere", &[]).unwrap_err();
        assert!(matches!(err, TravelPackError::InsufficientData { .. }));
    }

    #[test]
    fn test_all_null_readings_are_insufficient() {
        let readings = vec![DailyReading::default(), missing_min(12.0, 20.0)];
        let err = summarize("Nowhere", &readings).unwrap_err();
        assert!(matches!(err, TravelPackError::InsufficientData { .. }));
    }

    #[rstest]
    #[case(4.9, "Cold weather with freezing temperatures")]
    #[case(5.0, "Cool weather, bring warm layers")]
    #[case(14.9, "Cool weather, bring warm layers")]
    #[case(15.0, "Mild weather, comfortable temperatures")]
    #[case(25.0, "Warm weather, light clothing recommended")]
    #[case(35.0, "Hot weather, stay cool and hydrated")]
    fn test_temperature_bands(#[case] avg: f64, #[case] expected: &str) {
        assert_eq!(describe(avg, avg, avg, 0.0), expected);
    }

    #[rstest]
    #[case(8.0, "")]
    #[case(8.5, "; moderate temperature variation")]
    #[case(15.0, "; moderate temperature variation")]
    #[case(15.5, "; significant temperature swings between day and night")]
    fn test_range_phrases(#[case] range: f64, #[case] suffix: &str) {
        let summary = describe(20.0, 10.0, 10.0 + range, 0.0);
        assert_eq!(
            summary,
            format!("Mild weather, comfortable temperatures{suffix}")
        );
    }

    #[rstest]
    #[case(20.0, "")]
    #[case(20.5, ". Low chance of rain")]
    #[case(40.0, ". Low chance of rain")]
    #[case(41.0, ". Moderate chance of rain, consider rain gear")]
    #[case(70.0, ". Moderate chance of rain, consider rain gear")]
    #[case(71.0, ". High chance of rain, pack waterproof items")]
    fn test_rain_phrases(#[case] rain: f64, #[case] suffix: &str) {
        let summary = describe(20.0, 18.0, 22.0, rain);
        assert_eq!(
            summary,
            format!("Mild weather, comfortable temperatures{suffix}")
        );
    }

    #[test]
    fn test_combined_summary() {
        assert_eq!(
            describe(2.0, -8.0, 9.0, 75.0),
            "Cold weather with freezing temperatures; significant temperature swings between day and night. High chance of rain, pack waterproof items"
        );
    }
}
