// crates/oilseed-core/src/inventory.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crop::CropType;
use crate::profile::Location;

/// Lifecycle states of an inventory lot.
///
///   Procured --> Stored --> InTransit --> Processed --> Sold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Procured,
    Stored,
    InTransit,
    Processed,
    Sold,
}

impl InventoryStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            InventoryStatus::Procured => "procured",
            InventoryStatus::Stored => "stored",
            InventoryStatus::InTransit => "in_transit",
            InventoryStatus::Processed => "processed",
            InventoryStatus::Sold => "sold",
        }
    }
}

/// A lot of procured oilseed held by an FPO, processor, or retailer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLot {
    pub id: Uuid,
    /// Planting this lot was harvested from, when known.
    pub crop_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub warehouse_id: Option<Uuid>,
    pub crop_type: CropType,
    pub quantity_kg: f64,
    pub quality_grade: Option<String>,
    pub procurement_date: NaiveDate,
    pub status: InventoryStatus,
    pub price_per_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryLot {
    /// Value of the lot at its procurement price. A lot without a price
    /// contributes zero, matching the dashboard aggregation contract.
    pub fn value(&self) -> f64 {
        self.quantity_kg * self.price_per_kg.unwrap_or(0.0)
    }
}

/// Operational state of a warehouse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseStatus {
    Active,
    Inactive,
    Maintenance,
}

/// A storage facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: Uuid,
    pub name: String,
    pub operator_id: Option<Uuid>,
    pub location: Option<Location>,
    pub capacity_tonnes: f64,
    pub current_utilization_tonnes: f64,
    pub status: WarehouseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lot(quantity_kg: f64, price_per_kg: Option<f64>) -> InventoryLot {
        let now = Utc::now();
        InventoryLot {
            id: Uuid::now_v7(),
            crop_id: None,
            owner_id: Uuid::now_v7(),
            warehouse_id: None,
            crop_type: CropType::Soybean,
            quantity_kg,
            quality_grade: None,
            procurement_date: now.date_naive(),
            status: InventoryStatus::Procured,
            price_per_kg,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_lot_value() {
        assert_eq!(make_lot(100.0, Some(45.5)).value(), 4550.0);
    }

    #[test]
    fn test_lot_value_missing_price_counts_zero() {
        assert_eq!(make_lot(100.0, None).value(), 0.0);
    }
}
