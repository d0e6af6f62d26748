// crates/oilseed-core/src/logistics.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::Location;

/// Lifecycle states of a shipment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Scheduled,
    InTransit,
    Delivered,
    Delayed,
}

impl ShipmentStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            ShipmentStatus::Scheduled => "scheduled",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Delayed => "delayed",
        }
    }
}

/// One movement of an inventory lot between locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub inventory_id: Uuid,
    pub from_location: Option<Location>,
    pub to_location: Option<Location>,
    pub transporter_id: Option<Uuid>,
    pub vehicle_number: Option<String>,
    pub dispatch_date: DateTime<Utc>,
    pub expected_arrival: DateTime<Utc>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
