//! Table-driven clothing policy
//!
//! Each ladder is an ordered list of rows. Outerwear stops at the first tier
//! whose band matches; footwear and accessory rows are all evaluated.

use crate::models::{PackingItem, PerceivedTemperatures};

/// Inputs every rule row can look at
#[derive(Debug, Clone, Copy)]
pub struct Conditions {
    pub perceived: PerceivedTemperatures,
    /// Raw mean precipitation probability, never shifted by tolerance
    pub rain_chance: f64,
    pub humidity: f64,
    pub trip_days: u32,
}

impl Conditions {
    /// Half the trip length rounded up, at least 1
    #[must_use]
    pub fn half_trip(&self) -> u32 {
        self.trip_days.div_ceil(2).max(1)
    }
}

/// Rain chance at which tops, bottoms and boots get a rain bonus
pub const HEAVY_RAIN_CHANCE: f64 = 60.0;
/// Rain chance at which rain protection is packed
pub const RAIN_GEAR_CHANCE: f64 = 40.0;

pub struct OuterwearTier {
    pub name: &'static str,
    /// Perceived average must be below this value
    pub below_avg: f64,
    pub items: fn(&Conditions) -> Vec<PackingItem>,
}

pub static OUTERWEAR_TIERS: &[OuterwearTier] = &[
    OuterwearTier {
        name: "freezing",
        below_avg: 5.0,
        items: |c| {
            let mut items = vec![PackingItem::new("heavy coat", 1)];
            if c.perceived.min < 0.0 {
                items.push(PackingItem::new("thermals", c.half_trip()));
            }
            items
        },
    },
    OuterwearTier {
        name: "cold",
        below_avg: 10.0,
        items: |c| {
            let mut items = vec![PackingItem::new("heavy coat", 1)];
            if c.trip_days > 3 {
                items.push(PackingItem::new("thermals", 1));
            }
            items
        },
    },
    OuterwearTier {
        name: "cool",
        below_avg: 15.0,
        items: |_| vec![PackingItem::new("light/heavy jacket", 1)],
    },
    OuterwearTier {
        name: "mild",
        below_avg: 20.0,
        items: |_| vec![PackingItem::new("light jacket", 1)],
    },
    OuterwearTier {
        name: "warm",
        below_avg: 25.0,
        items: |c| {
            if c.perceived.min < 18.0 {
                vec![PackingItem::new("light cardigan", 1)]
            } else {
                Vec::new()
            }
        },
    },
];

/// Walk the temperature ladder, then add a rain jacket if nothing covers rain
#[must_use]
pub fn outerwear(conditions: &Conditions) -> Vec<PackingItem> {
    let mut items = OUTERWEAR_TIERS
        .iter()
        .find(|tier| conditions.perceived.avg < tier.below_avg)
        .map(|tier| (tier.items)(conditions))
        .unwrap_or_default();

    let covered = items
        .iter()
        .any(|item| item.name.contains("coat") || item.name.contains("jacket"));
    if conditions.rain_chance >= RAIN_GEAR_CHANCE && !covered {
        items.push(PackingItem::new("rain jacket", 1));
    }

    items
}

pub struct ItemRule {
    pub items: &'static [&'static str],
    pub applies: fn(&Conditions) -> bool,
}

pub static FOOTWEAR_RULES: &[ItemRule] = &[
    ItemRule {
        items: &["sneakers"],
        applies: |_| true,
    },
    ItemRule {
        items: &["sandals"],
        applies: |c| c.perceived.avg >= 24.0 || c.trip_days > 4,
    },
    ItemRule {
        items: &["boots"],
        applies: |c| c.perceived.avg < 10.0 || c.rain_chance >= HEAVY_RAIN_CHANCE,
    },
];

pub static ACCESSORY_RULES: &[ItemRule] = &[
    ItemRule {
        items: &["sunglasses", "hat"],
        applies: |c| c.perceived.max >= 24.0,
    },
    ItemRule {
        items: &["scarf", "gloves"],
        applies: |c| c.perceived.avg < 15.0,
    },
    ItemRule {
        items: &["compact umbrella"],
        applies: |c| c.rain_chance >= RAIN_GEAR_CHANCE,
    },
    ItemRule {
        items: &["moisture-wicking socks"],
        applies: |c| c.humidity > 70.0 && c.perceived.avg >= 20.0,
    },
];

fn matching<'a>(
    rules: &'a [ItemRule],
    conditions: &'a Conditions,
) -> impl Iterator<Item = &'static str> + 'a {
    rules
        .iter()
        .filter(move |rule| (rule.applies)(conditions))
        .flat_map(|rule| rule.items.iter().copied())
}

#[must_use]
pub fn footwear(conditions: &Conditions) -> Vec<PackingItem> {
    matching(FOOTWEAR_RULES, conditions)
        .map(|name| PackingItem::new(name, 1))
        .collect()
}

/// Accessories in rule order, without duplicates
#[must_use]
pub fn accessories(conditions: &Conditions) -> Vec<String> {
    let mut accessories: Vec<String> = Vec::new();
    for name in matching(ACCESSORY_RULES, conditions) {
        if !accessories.iter().any(|a| a == name) {
            accessories.push(name.to_string());
        }
    }
    accessories
}
