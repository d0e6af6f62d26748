// crates/oilseed-core/src/traits.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::advisory::Advisory;
use crate::credit::CreditFacility;
use crate::crop::Crop;
use crate::error::PlatformError;
use crate::inventory::{InventoryLot, Warehouse};
use crate::logistics::{Shipment, ShipmentStatus};
use crate::market::MarketPrice;
use crate::profile::Profile;
use crate::session::{Credentials, Session};
use crate::trace::{TraceabilityRecord, TracedRecord};

/// Trait for the managed record store backing every view.
///
/// Implemented by oilseed-store (RocksDB backend, plus an in-memory
/// backend for tests). Reads are scoped by explicit ids passed in by the
/// caller; nothing in the store consults ambient session state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // --- Profiles ---

    async fn insert_profile(&self, profile: &Profile) -> Result<(), PlatformError>;

    async fn profile(&self, id: &Uuid) -> Result<Option<Profile>, PlatformError>;

    // --- Traceability ---

    /// All traceability rows for a batch, joined with the actor's profile
    /// (name, role), ordered by (timestamp, id) ascending. Empty result
    /// for an unknown batch is a normal outcome, not an error.
    async fn traceability_for_batch(
        &self,
        batch_id: &str,
    ) -> Result<Vec<TracedRecord>, PlatformError>;

    /// The chronologically last record of a batch, if any.
    async fn tail_of_batch(
        &self,
        batch_id: &str,
    ) -> Result<Option<TraceabilityRecord>, PlatformError>;

    /// Append one traceability record. The only write path for the chain;
    /// there is no update or delete.
    async fn append_traceability(&self, record: &TraceabilityRecord)
        -> Result<(), PlatformError>;

    // --- Crops ---

    async fn insert_crop(&self, crop: &Crop) -> Result<(), PlatformError>;

    /// A farmer's plantings, newest first.
    async fn crops_for_farmer(&self, farmer_id: &Uuid) -> Result<Vec<Crop>, PlatformError>;

    async fn all_crops(&self) -> Result<Vec<Crop>, PlatformError>;

    // --- Advisories ---

    async fn insert_advisory(&self, advisory: &Advisory) -> Result<(), PlatformError>;

    /// Latest advisories by created_at descending, at most `limit` rows.
    async fn recent_advisories(&self, limit: usize) -> Result<Vec<Advisory>, PlatformError>;

    // --- Inventory ---

    async fn insert_inventory(&self, lot: &InventoryLot) -> Result<(), PlatformError>;

    async fn inventory_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<InventoryLot>, PlatformError>;

    async fn all_inventory(&self) -> Result<Vec<InventoryLot>, PlatformError>;

    // --- Warehouses ---

    async fn insert_warehouse(&self, warehouse: &Warehouse) -> Result<(), PlatformError>;

    async fn warehouses(&self) -> Result<Vec<Warehouse>, PlatformError>;

    // --- Logistics ---

    async fn insert_shipment(&self, shipment: &Shipment) -> Result<(), PlatformError>;

    async fn shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> Result<Vec<Shipment>, PlatformError>;

    // --- Market prices ---

    async fn insert_market_price(&self, price: &MarketPrice) -> Result<(), PlatformError>;

    /// Observed (non-prediction) prices, newest first, at most `limit` rows.
    async fn observed_prices(&self, limit: usize) -> Result<Vec<MarketPrice>, PlatformError>;

    // --- Credit facilities ---

    async fn insert_credit_facility(
        &self,
        facility: &CreditFacility,
    ) -> Result<(), PlatformError>;

    /// A farmer's facilities, newest first.
    async fn credit_for_farmer(
        &self,
        farmer_id: &Uuid,
    ) -> Result<Vec<CreditFacility>, PlatformError>;
}

/// Trait for the identity provider that authenticates users.
///
/// Yields a profile at sign-in; callers hold it in a `Session` and pass
/// it explicitly to scoped operations.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate and return the user's profile.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Profile, PlatformError>;

    /// End a session. Consumes the session value; backends that hold
    /// per-session state (tokens, server-side sessions) release it here.
    async fn sign_out(&self, session: Session) -> Result<(), PlatformError>;
}
