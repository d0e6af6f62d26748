// crates/oilseed-core/src/lib.rs
//
// oilseed-core: Core types, traits, and hash-chain primitives for the
// Oilseed Value Chain Platform.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the canonical row types for every entity the platform tracks,
// the shared error type, the content-fingerprint helpers for traceability
// records, the role capability table, and the trait seams to the record
// store and identity provider.

pub mod advisory;
pub mod capability;
pub mod credit;
pub mod crop;
pub mod error;
pub mod inventory;
pub mod logistics;
pub mod market;
pub mod profile;
pub mod session;
pub mod trace;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use oilseed_core::TraceabilityRecord;`

// Profile types
pub use profile::{Location, Profile, UserRole};

// Crop types
pub use crop::{Crop, CropStatus, CropType};

// Advisory types
pub use advisory::{Advisory, AdvisoryType, Priority};

// Inventory types
pub use inventory::{InventoryLot, InventoryStatus, Warehouse, WarehouseStatus};

// Logistics types
pub use logistics::{Shipment, ShipmentStatus};

// Market types
pub use market::MarketPrice;

// Credit types
pub use credit::{CreditFacility, FacilityStatus, FacilityType};

// Traceability types
pub use trace::{Stage, TraceabilityRecord, TracedRecord};

// Capability table
pub use capability::{can_access, views_for, ViewId};

// Session types
pub use session::{Credentials, DirectoryProvider, Session};

// Error type
pub use error::PlatformError;

// Traits
pub use traits::{IdentityProvider, RecordStore};
