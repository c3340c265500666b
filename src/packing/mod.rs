//! Packing rules engine
//!
//! Turns a weather aggregate, a tolerance and a trip length into concrete
//! clothing quantities. Every threshold is evaluated against perceived
//! temperatures; rain and humidity are used as reported.

pub mod rules;

use crate::TravelPackError;
use crate::models::{Bottoms, PackingPlan, TemperatureTolerance, Tops, WeatherAggregate};
use rules::{Conditions, HEAVY_RAIN_CHANCE};

pub const MAX_TOPS: u32 = 8;
pub const MAX_BOTTOMS: u32 = 6;

/// Build the packing plan; advisory `notes` are left empty for the caller
pub fn compute_packing_list(
    aggregate: &WeatherAggregate,
    tolerance: TemperatureTolerance,
    trip_days: u32,
) -> crate::Result<PackingPlan> {
    if trip_days < 1 {
        return Err(TravelPackError::invalid_trip_window(
            "A trip must last at least one day",
        ));
    }

    let conditions = Conditions {
        perceived: tolerance.perceive(aggregate),
        rain_chance: aggregate.rain_chance,
        humidity: aggregate.humidity,
        trip_days,
    };

    Ok(PackingPlan {
        tops: tops(&conditions),
        bottoms: bottoms(&conditions),
        outerwear: rules::outerwear(&conditions),
        footwear: rules::footwear(&conditions),
        accessories: rules::accessories(&conditions),
        notes: Vec::new(),
    })
}

/// `ceil(count * percent / 100)` without float error
fn share(count: u32, percent: u32) -> u32 {
    (count * percent).div_ceil(100)
}

fn tops(c: &Conditions) -> Tops {
    let avg = c.perceived.avg;
    let mut count = c.trip_days.clamp(1, MAX_TOPS);
    let mut note: Option<String> = None;

    if avg >= 24.0 {
        count += match c.trip_days {
            0..=3 => 1,
            4..=7 => 2,
            _ => 3,
        };
        note = Some("Extra tops recommended due to hot weather and sweating.".to_string());
    } else if avg <= 5.0 {
        count += 1;
        note = Some("Extra top recommended for layering in cold weather.".to_string());
    }

    if c.rain_chance >= HEAVY_RAIN_CHANCE {
        count += 1;
        note = Some(match note {
            Some(existing) => existing + " Extra top for potential rain.",
            None => "Extra top recommended due to high chance of rain.".to_string(),
        });
    }

    let total = count.clamp(1, MAX_TOPS);
    let (short_sleeve, long_sleeve) = if avg >= 22.0 {
        let short = share(total, 80);
        (short, (total - short).max(1))
    } else if avg >= 15.0 {
        let short = share(total, 60);
        (short, total - short)
    } else {
        let long = share(total, 80);
        ((total - long).max(1), long)
    };

    Tops {
        short_sleeve,
        long_sleeve,
        total: short_sleeve + long_sleeve,
        note,
    }
}

fn bottoms(c: &Conditions) -> Bottoms {
    let avg = c.perceived.avg;
    let mut count = c.half_trip().min(MAX_BOTTOMS);
    let mut note: Option<String> = None;

    if avg >= 26.0 {
        count = (count + 1).min(MAX_BOTTOMS);
        note = Some("Extra bottoms recommended due to hot weather and sweating.".to_string());
    }

    if c.rain_chance >= HEAVY_RAIN_CHANCE {
        count = (count + 1).min(MAX_BOTTOMS);
        note = Some(match note {
            Some(existing) => existing + " Extra bottoms for potential rain.",
            None => "Extra bottoms recommended due to high chance of rain.".to_string(),
        });
    }

    let total = count.min(MAX_BOTTOMS);
    let (shorts, pants) = if avg >= 24.0 {
        let shorts = share(total, 70);
        (shorts, (total - shorts).max(1))
    } else if avg >= 18.0 {
        let shorts = share(total, 40);
        (shorts, total - shorts)
    } else {
        let pants = share(total, 80);
        ((total - pants).max(1), pants)
    };

    Bottoms {
        shorts,
        pants,
        total: shorts + pants,
        note,
    }
}
