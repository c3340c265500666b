//! Packing plan model

use serde::{Deserialize, Serialize};

/// A counted item such as outerwear or footwear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub name: String,
    pub count: u32,
}

impl PackingItem {
    #[must_use]
    pub fn new(name: &str, count: u32) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tops {
    pub short_sleeve: u32,
    pub long_sleeve: u32,
    /// Always `short_sleeve + long_sleeve`
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bottoms {
    pub shorts: u32,
    pub pants: u32,
    /// Always `shorts + pants`
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Concrete clothing quantities for one trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingPlan {
    pub tops: Tops,
    pub bottoms: Bottoms,
    pub outerwear: Vec<PackingItem>,
    pub footwear: Vec<PackingItem>,
    pub accessories: Vec<String>,
    pub notes: Vec<String>,
}

impl PackingPlan {
    /// Look up a counted outerwear item by name
    #[must_use]
    pub fn outerwear_count(&self, name: &str) -> Option<u32> {
        self.outerwear.iter().find(|i| i.name == name).map(|i| i.count)
    }

    #[must_use]
    pub fn has_footwear(&self, name: &str) -> bool {
        self.footwear.iter().any(|i| i.name == name)
    }

    #[must_use]
    pub fn has_accessory(&self, name: &str) -> bool {
        self.accessories.iter().any(|a| a == name)
    }
}
