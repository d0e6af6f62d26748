// crates/oilseed-core/src/crop.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::Location;

/// The eight oilseed crops the platform tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Soybean,
    Groundnut,
    Mustard,
    Sunflower,
    Safflower,
    Sesame,
    Niger,
    Linseed,
}

impl CropType {
    pub fn tag(&self) -> &'static str {
        match self {
            CropType::Soybean => "soybean",
            CropType::Groundnut => "groundnut",
            CropType::Mustard => "mustard",
            CropType::Sunflower => "sunflower",
            CropType::Safflower => "safflower",
            CropType::Sesame => "sesame",
            CropType::Niger => "niger",
            CropType::Linseed => "linseed",
        }
    }
}

/// Lifecycle states of a planting.
///
///   Planned --> Planted --> Growing --> Harvested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Planned,
    Planted,
    Growing,
    Harvested,
}

impl CropStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            CropStatus::Planned => "planned",
            CropStatus::Planted => "planted",
            CropStatus::Growing => "growing",
            CropStatus::Harvested => "harvested",
        }
    }
}

/// One planting owned by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub crop_type: CropType,
    pub area_hectares: f64,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub actual_harvest_date: Option<NaiveDate>,
    pub status: CropStatus,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
