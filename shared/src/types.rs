//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Broad crop categories offered on the crop entry form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Cereal,
    Pulse,
    Vegetable,
    Fruit,
    Spice,
    Oilseed,
    Other,
}

impl CropCategory {
    /// All categories, in the order they appear in form dropdowns
    pub const ALL: [CropCategory; 7] = [
        CropCategory::Cereal,
        CropCategory::Pulse,
        CropCategory::Vegetable,
        CropCategory::Fruit,
        CropCategory::Spice,
        CropCategory::Oilseed,
        CropCategory::Other,
    ];

    /// Wire/database name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "cereal",
            CropCategory::Pulse => "pulse",
            CropCategory::Vegetable => "vegetable",
            CropCategory::Fruit => "fruit",
            CropCategory::Spice => "spice",
            CropCategory::Oilseed => "oilseed",
            CropCategory::Other => "other",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::Cereal => "Cereal",
            CropCategory::Pulse => "Pulse",
            CropCategory::Vegetable => "Vegetable",
            CropCategory::Fruit => "Fruit",
            CropCategory::Spice => "Spice",
            CropCategory::Oilseed => "Oilseed",
            CropCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CropCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or("unknown crop category")
    }
}
