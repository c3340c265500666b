//! Narrative generator: the one-line outlook and advisory notes

use crate::models::{TemperatureTolerance, WeatherAggregate};

/// One sentence describing what the traveller should expect to wear
#[must_use]
pub fn summary_line(aggregate: &WeatherAggregate, tolerance: TemperatureTolerance) -> &'static str {
    let avg = tolerance.perceive(aggregate).avg;

    if avg < 8.0 {
        "Cold conditions; heavy winter gear recommended."
    } else if avg < 14.0 {
        "Cool weather; layers and warm clothing needed."
    } else if avg < 20.0 {
        "Mild days, cooler evenings; light layers recommended."
    } else if avg < 26.0 {
        "Warm days, comfortable evenings; light clothing suitable."
    } else {
        "Hot weather; light, breathable clothing essential."
    }
}

/// Plain-text advisories in a fixed order: humidity, rain, tolerance
#[must_use]
pub fn notes(aggregate: &WeatherAggregate, tolerance: TemperatureTolerance) -> Vec<String> {
    let mut notes = Vec::new();

    if aggregate.humidity > 70.0 {
        notes.push("High humidity - breathable fabrics recommended".to_string());
    }

    if aggregate.rain_chance >= 40.0 {
        notes.push("Rain likely - pack waterproof items".to_string());
    }

    match tolerance {
        TemperatureTolerance::ColdSensitive => {
            notes.push("Cold-sensitive - pack extra warm layers".to_string());
        }
        TemperatureTolerance::HeatSensitive => {
            notes.push("Heat-sensitive - prioritize cooling fabrics".to_string());
        }
        TemperatureTolerance::Neutral => {}
    }

    notes
}
