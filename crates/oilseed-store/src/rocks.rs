// crates/oilseed-store/src/rocks.rs
//
// RocksDB-backed persistent storage for platform rows.
//
// Key format:
//   - Profiles:      `profile:{uuid}` -> JSON profile
//   - Traceability:  `trace:{batch_id}:{micros:020}:{uuid}` -> JSON record
//   - Crops:         `crop:{uuid}` -> JSON; `crop_by_farmer:{farmer}:{uuid}` -> empty
//   - Advisories:    `advisory:{micros:020}:{uuid}` -> JSON
//   - Inventory:     `inventory:{uuid}` -> JSON; `inv_by_owner:{owner}:{uuid}` -> empty
//   - Warehouses:    `warehouse:{uuid}` -> JSON
//   - Shipments:     `shipment:{uuid}` -> JSON; `shipment_by_status:{tag}:{uuid}` -> empty
//   - Market prices: `price:{micros:020}:{uuid}` -> JSON
//   - Credit:        `credit:{uuid}` -> JSON; `credit_by_farmer:{farmer}:{uuid}` -> empty
//
// Traceability keys embed the zero-padded microsecond timestamp so that a
// prefix scan over `trace:{batch_id}:` yields rows in (timestamp, id)
// ascending order without an in-memory sort. Batch ids must not contain
// `:` (enforced by the chain writer's input validation upstream).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rocksdb::{DBWithThreadMode, MultiThreaded, Options};
use uuid::Uuid;

use oilseed_core::advisory::Advisory;
use oilseed_core::credit::CreditFacility;
use oilseed_core::crop::Crop;
use oilseed_core::error::PlatformError;
use oilseed_core::inventory::{InventoryLot, Warehouse};
use oilseed_core::logistics::{Shipment, ShipmentStatus};
use oilseed_core::market::MarketPrice;
use oilseed_core::profile::Profile;
use oilseed_core::trace::{TraceabilityRecord, TracedRecord};
use oilseed_core::traits::RecordStore;

/// RocksDB wrapper implementing the `RecordStore` trait.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
}

/// Zero-padded microsecond timestamp so lexicographic key order is time
/// order.
fn time_key(ts: &DateTime<Utc>) -> String {
    format!("{:020}", ts.timestamp_micros())
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, PlatformError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path).map_err(|e| {
            PlatformError::Storage(format!("Failed to open RocksDB at {}: {}", path, e))
        })?;

        Ok(Self { db })
    }

    fn trace_key(record: &TraceabilityRecord) -> Vec<u8> {
        format!(
            "trace:{}:{}:{}",
            record.batch_id,
            time_key(&record.timestamp),
            record.id
        )
        .into_bytes()
    }

    /// Put raw bytes into RocksDB, mapping errors to PlatformError::Storage.
    fn put_raw(&self, key: &[u8], value: &[u8]) -> Result<(), PlatformError> {
        self.db
            .put(key, value)
            .map_err(|e| PlatformError::Storage(format!("RocksDB put failed: {}", e)))
    }

    /// Get raw bytes from RocksDB, mapping errors to PlatformError::Retrieval.
    fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>, PlatformError> {
        self.db
            .get(key)
            .map_err(|e| PlatformError::Retrieval(format!("RocksDB get failed: {}", e)))
    }

    /// Collect all JSON values whose key starts with `prefix`, in key order.
    fn scan_values<T: serde::de::DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<T>, PlatformError> {
        let prefix_bytes = prefix.as_bytes();
        let mut rows = Vec::new();

        let iter = self.db.prefix_iterator(prefix_bytes);
        for item in iter {
            let (key, value) = item
                .map_err(|e| PlatformError::Retrieval(format!("RocksDB iteration error: {}", e)))?;

            // Stop when the prefix no longer matches.
            if !key.starts_with(prefix_bytes) {
                break;
            }

            let row: T = serde_json::from_slice(&value)?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Collect the primary rows referenced by a secondary index prefix.
    ///
    /// Index keys are `{index_prefix}{uuid}` with empty values; the uuid
    /// suffix is resolved against `{primary_prefix}{uuid}`.
    fn scan_index<T: serde::de::DeserializeOwned>(
        &self,
        index_prefix: &str,
        primary_prefix: &str,
    ) -> Result<Vec<T>, PlatformError> {
        let prefix_bytes = index_prefix.as_bytes();
        let mut rows = Vec::new();

        let iter = self.db.prefix_iterator(prefix_bytes);
        for item in iter {
            let (key, _value) = item
                .map_err(|e| PlatformError::Retrieval(format!("RocksDB iteration error: {}", e)))?;

            if !key.starts_with(prefix_bytes) {
                break;
            }

            let uuid_bytes = &key[prefix_bytes.len()..];
            let uuid_str = std::str::from_utf8(uuid_bytes).unwrap_or("");
            if let Ok(id) = Uuid::parse_str(uuid_str) {
                let primary = format!("{}{}", primary_prefix, id);
                if let Some(bytes) = self.get_raw(primary.as_bytes())? {
                    let row: T = serde_json::from_slice(&bytes)?;
                    rows.push(row);
                }
            }
        }

        Ok(rows)
    }

    fn put_json<T: serde::Serialize>(&self, key: String, value: &T) -> Result<(), PlatformError> {
        let json = serde_json::to_vec(value)?;
        self.put_raw(key.as_bytes(), &json)
    }

    /// Write an empty-valued secondary index entry.
    fn put_index(&self, key: String) -> Result<(), PlatformError> {
        self.put_raw(key.as_bytes(), &[])
    }
}

/// Sort newest-first on (created_at, id), matching the memory backend.
fn sort_newest_first<T>(rows: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>, id: impl Fn(&T) -> Uuid) {
    rows.sort_by(|a, b| {
        created_at(b)
            .cmp(&created_at(a))
            .then(id(b).cmp(&id(a)))
    });
}

#[async_trait]
impl RecordStore for RocksStore {
    async fn insert_profile(&self, profile: &Profile) -> Result<(), PlatformError> {
        self.put_json(format!("profile:{}", profile.id), profile)
    }

    async fn profile(&self, id: &Uuid) -> Result<Option<Profile>, PlatformError> {
        match self.get_raw(format!("profile:{}", id).as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn traceability_for_batch(
        &self,
        batch_id: &str,
    ) -> Result<Vec<TracedRecord>, PlatformError> {
        // Key order is (timestamp, id) ascending, so no sort is needed.
        let records: Vec<TraceabilityRecord> =
            self.scan_values(&format!("trace:{}:", batch_id))?;

        let mut joined = Vec::with_capacity(records.len());
        for record in records {
            let actor = self.profile(&record.actor_id).await?.ok_or_else(|| {
                PlatformError::Retrieval(format!(
                    "actor profile {} missing for batch {}",
                    record.actor_id, batch_id
                ))
            })?;
            joined.push(TracedRecord {
                actor_name: actor.full_name,
                actor_role: actor.role,
                record,
            });
        }
        Ok(joined)
    }

    async fn tail_of_batch(
        &self,
        batch_id: &str,
    ) -> Result<Option<TraceabilityRecord>, PlatformError> {
        let records: Vec<TraceabilityRecord> =
            self.scan_values(&format!("trace:{}:", batch_id))?;
        Ok(records.into_iter().last())
    }

    async fn append_traceability(
        &self,
        record: &TraceabilityRecord,
    ) -> Result<(), PlatformError> {
        let json = serde_json::to_vec(record)?;
        self.put_raw(&Self::trace_key(record), &json)
    }

    async fn insert_crop(&self, crop: &Crop) -> Result<(), PlatformError> {
        self.put_json(format!("crop:{}", crop.id), crop)?;
        self.put_index(format!("crop_by_farmer:{}:{}", crop.farmer_id, crop.id))
    }

    async fn crops_for_farmer(&self, farmer_id: &Uuid) -> Result<Vec<Crop>, PlatformError> {
        let mut rows: Vec<Crop> =
            self.scan_index(&format!("crop_by_farmer:{}:", farmer_id), "crop:")?;
        sort_newest_first(&mut rows, |c| c.created_at, |c| c.id);
        Ok(rows)
    }

    async fn all_crops(&self) -> Result<Vec<Crop>, PlatformError> {
        self.scan_values("crop:")
    }

    async fn insert_advisory(&self, advisory: &Advisory) -> Result<(), PlatformError> {
        self.put_json(
            format!(
                "advisory:{}:{}",
                time_key(&advisory.created_at),
                advisory.id
            ),
            advisory,
        )
    }

    async fn recent_advisories(&self, limit: usize) -> Result<Vec<Advisory>, PlatformError> {
        // Keys are time-ascending; reverse for newest first.
        let mut rows: Vec<Advisory> = self.scan_values("advisory:")?;
        rows.reverse();
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert_inventory(&self, lot: &InventoryLot) -> Result<(), PlatformError> {
        self.put_json(format!("inventory:{}", lot.id), lot)?;
        self.put_index(format!("inv_by_owner:{}:{}", lot.owner_id, lot.id))
    }

    async fn inventory_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<InventoryLot>, PlatformError> {
        let mut rows: Vec<InventoryLot> =
            self.scan_index(&format!("inv_by_owner:{}:", owner_id), "inventory:")?;
        sort_newest_first(&mut rows, |l| l.created_at, |l| l.id);
        Ok(rows)
    }

    async fn all_inventory(&self) -> Result<Vec<InventoryLot>, PlatformError> {
        self.scan_values("inventory:")
    }

    async fn insert_warehouse(&self, warehouse: &Warehouse) -> Result<(), PlatformError> {
        self.put_json(format!("warehouse:{}", warehouse.id), warehouse)
    }

    async fn warehouses(&self) -> Result<Vec<Warehouse>, PlatformError> {
        self.scan_values("warehouse:")
    }

    async fn insert_shipment(&self, shipment: &Shipment) -> Result<(), PlatformError> {
        self.put_json(format!("shipment:{}", shipment.id), shipment)?;
        self.put_index(format!(
            "shipment_by_status:{}:{}",
            shipment.status.tag(),
            shipment.id
        ))
    }

    async fn shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> Result<Vec<Shipment>, PlatformError> {
        self.scan_index(
            &format!("shipment_by_status:{}:", status.tag()),
            "shipment:",
        )
    }

    async fn insert_market_price(&self, price: &MarketPrice) -> Result<(), PlatformError> {
        self.put_json(
            format!("price:{}:{}", time_key(&price.created_at), price.id),
            price,
        )
    }

    async fn observed_prices(&self, limit: usize) -> Result<Vec<MarketPrice>, PlatformError> {
        let mut rows: Vec<MarketPrice> = self.scan_values("price:")?;
        rows.retain(|p| !p.is_prediction);
        rows.reverse();
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert_credit_facility(
        &self,
        facility: &CreditFacility,
    ) -> Result<(), PlatformError> {
        self.put_json(format!("credit:{}", facility.id), facility)?;
        self.put_index(format!(
            "credit_by_farmer:{}:{}",
            facility.farmer_id, facility.id
        ))
    }

    async fn credit_for_farmer(
        &self,
        farmer_id: &Uuid,
    ) -> Result<Vec<CreditFacility>, PlatformError> {
        let mut rows: Vec<CreditFacility> =
            self.scan_index(&format!("credit_by_farmer:{}:", farmer_id), "credit:")?;
        sort_newest_first(&mut rows, |f| f.created_at, |f| f.id);
        Ok(rows)
    }
}
