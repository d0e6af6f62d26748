// crates/oilseed-store/src/memory.rs
//
// In-memory RecordStore. Backs unit/integration tests and the CLI's
// ephemeral mode. Ordering is made deterministic by sorting on the same
// (timestamp, id) / (created_at, id) keys the RocksDB backend encodes
// into its keyspace.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
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

#[derive(Debug, Default)]
struct Tables {
    profiles: BTreeMap<Uuid, Profile>,
    traceability: Vec<TraceabilityRecord>,
    crops: Vec<Crop>,
    advisories: Vec<Advisory>,
    inventory: Vec<InventoryLot>,
    warehouses: Vec<Warehouse>,
    shipments: Vec<Shipment>,
    market_prices: Vec<MarketPrice>,
    credit_facilities: Vec<CreditFacility>,
}

/// In-memory implementation of the `RecordStore` trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_profile(&self, profile: &Profile) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn profile(&self, id: &Uuid) -> Result<Option<Profile>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.get(id).cloned())
    }

    async fn traceability_for_batch(
        &self,
        batch_id: &str,
    ) -> Result<Vec<TracedRecord>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&TraceabilityRecord> = tables
            .traceability
            .iter()
            .filter(|r| r.batch_id == batch_id)
            .collect();
        rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));

        let mut joined = Vec::with_capacity(rows.len());
        for record in rows {
            let actor = tables.profiles.get(&record.actor_id).ok_or_else(|| {
                PlatformError::Retrieval(format!(
                    "actor profile {} missing for batch {}",
                    record.actor_id, batch_id
                ))
            })?;
            joined.push(TracedRecord {
                record: record.clone(),
                actor_name: actor.full_name.clone(),
                actor_role: actor.role,
            });
        }
        Ok(joined)
    }

    async fn tail_of_batch(
        &self,
        batch_id: &str,
    ) -> Result<Option<TraceabilityRecord>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables
            .traceability
            .iter()
            .filter(|r| r.batch_id == batch_id)
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)))
            .cloned())
    }

    async fn append_traceability(
        &self,
        record: &TraceabilityRecord,
    ) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.traceability.push(record.clone());
        Ok(())
    }

    async fn insert_crop(&self, crop: &Crop) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.crops.push(crop.clone());
        Ok(())
    }

    async fn crops_for_farmer(&self, farmer_id: &Uuid) -> Result<Vec<Crop>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Crop> = tables
            .crops
            .iter()
            .filter(|c| c.farmer_id == *farmer_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn all_crops(&self) -> Result<Vec<Crop>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables.crops.clone())
    }

    async fn insert_advisory(&self, advisory: &Advisory) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.advisories.push(advisory.clone());
        Ok(())
    }

    async fn recent_advisories(&self, limit: usize) -> Result<Vec<Advisory>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows = tables.advisories.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert_inventory(&self, lot: &InventoryLot) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.inventory.push(lot.clone());
        Ok(())
    }

    async fn inventory_for_owner(
        &self,
        owner_id: &Uuid,
    ) -> Result<Vec<InventoryLot>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<InventoryLot> = tables
            .inventory
            .iter()
            .filter(|lot| lot.owner_id == *owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn all_inventory(&self) -> Result<Vec<InventoryLot>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables.inventory.clone())
    }

    async fn insert_warehouse(&self, warehouse: &Warehouse) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.warehouses.push(warehouse.clone());
        Ok(())
    }

    async fn warehouses(&self) -> Result<Vec<Warehouse>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables.warehouses.clone())
    }

    async fn insert_shipment(&self, shipment: &Shipment) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.shipments.push(shipment.clone());
        Ok(())
    }

    async fn shipments_by_status(
        &self,
        status: ShipmentStatus,
    ) -> Result<Vec<Shipment>, PlatformError> {
        let tables = self.tables.read().await;
        Ok(tables
            .shipments
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect())
    }

    async fn insert_market_price(&self, price: &MarketPrice) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.market_prices.push(price.clone());
        Ok(())
    }

    async fn observed_prices(&self, limit: usize) -> Result<Vec<MarketPrice>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<MarketPrice> = tables
            .market_prices
            .iter()
            .filter(|p| !p.is_prediction)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn insert_credit_facility(
        &self,
        facility: &CreditFacility,
    ) -> Result<(), PlatformError> {
        let mut tables = self.tables.write().await;
        tables.credit_facilities.push(facility.clone());
        Ok(())
    }

    async fn credit_for_farmer(
        &self,
        farmer_id: &Uuid,
    ) -> Result<Vec<CreditFacility>, PlatformError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<CreditFacility> = tables
            .credit_facilities
            .iter()
            .filter(|f| f.farmer_id == *farmer_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use oilseed_core::profile::UserRole;
    use oilseed_core::trace::Stage;
    use std::collections::BTreeMap;

    fn make_trace(
        batch_id: &str,
        actor_id: Uuid,
        stage: Stage,
        offset_minutes: i64,
    ) -> TraceabilityRecord {
        let ts = Utc::now() + Duration::minutes(offset_minutes);
        let mut record = TraceabilityRecord {
            id: Uuid::now_v7(),
            batch_id: batch_id.to_string(),
            crop_id: None,
            inventory_id: None,
            stage,
            actor_id,
            timestamp: ts,
            location: None,
            action: format!("{} step", stage.tag()),
            hash: String::new(),
            previous_hash: None,
            metadata: BTreeMap::new(),
            created_at: ts,
        };
        record.hash = record.compute_hash();
        record
    }

    #[tokio::test]
    async fn test_batch_rows_come_back_time_ordered() {
        let store = MemoryStore::new();
        let actor = Profile::new(UserRole::Farmer, "Asha Patel", None);
        store.insert_profile(&actor).await.unwrap();

        // Insert out of timestamp order.
        let late = make_trace("B-1", actor.id, Stage::Storage, 20);
        let early = make_trace("B-1", actor.id, Stage::Farm, 0);
        let mid = make_trace("B-1", actor.id, Stage::Procurement, 10);
        store.append_traceability(&late).await.unwrap();
        store.append_traceability(&early).await.unwrap();
        store.append_traceability(&mid).await.unwrap();

        let rows = store.traceability_for_batch("B-1").await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].record.id, early.id);
        assert_eq!(rows[1].record.id, mid.id);
        assert_eq!(rows[2].record.id, late.id);
        assert_eq!(rows[0].actor_name, "Asha Patel");
        assert_eq!(rows[0].actor_role, UserRole::Farmer);
    }

    #[tokio::test]
    async fn test_equal_timestamps_break_ties_by_id() {
        let store = MemoryStore::new();
        let actor = Profile::new(UserRole::Fpo, "Malwa FPO", Some("Malwa FPO"));
        store.insert_profile(&actor).await.unwrap();

        let mut a = make_trace("B-2", actor.id, Stage::Farm, 0);
        let mut b = make_trace("B-2", actor.id, Stage::Procurement, 0);
        b.timestamp = a.timestamp;
        a.hash = a.compute_hash();
        b.hash = b.compute_hash();
        store.append_traceability(&b).await.unwrap();
        store.append_traceability(&a).await.unwrap();

        let first = store.traceability_for_batch("B-2").await.unwrap();
        let second = store.traceability_for_batch("B-2").await.unwrap();
        // Equal timestamps fall back to id order, identical across
        // repeated lookups.
        let ids_first: Vec<Uuid> = first.iter().map(|r| r.record.id).collect();
        let ids_second: Vec<Uuid> = second.iter().map(|r| r.record.id).collect();
        assert_eq!(ids_first, ids_second);
        assert_eq!(ids_first, vec![a.id.min(b.id), a.id.max(b.id)]);
    }

    #[tokio::test]
    async fn test_missing_actor_profile_is_retrieval_error() {
        let store = MemoryStore::new();
        let record = make_trace("B-3", Uuid::now_v7(), Stage::Farm, 0);
        store.append_traceability(&record).await.unwrap();

        let err = store.traceability_for_batch("B-3").await.unwrap_err();
        assert!(matches!(err, PlatformError::Retrieval(_)));
    }

    #[tokio::test]
    async fn test_tail_of_batch() {
        let store = MemoryStore::new();
        let actor = Profile::new(UserRole::Processor, "Vidarbha Oils", None);
        store.insert_profile(&actor).await.unwrap();

        assert!(store.tail_of_batch("B-4").await.unwrap().is_none());

        let first = make_trace("B-4", actor.id, Stage::Farm, 0);
        let second = make_trace("B-4", actor.id, Stage::Procurement, 5);
        store.append_traceability(&second).await.unwrap();
        store.append_traceability(&first).await.unwrap();

        let tail = store.tail_of_batch("B-4").await.unwrap().unwrap();
        assert_eq!(tail.id, second.id);
    }

    #[tokio::test]
    async fn test_recent_advisories_limit_and_order() {
        use oilseed_core::advisory::{AdvisoryType, Priority};

        let store = MemoryStore::new();
        for i in 0..7 {
            let at = Utc::now() + Duration::minutes(i);
            store
                .insert_advisory(&Advisory {
                    id: Uuid::now_v7(),
                    advisory_type: AdvisoryType::Weather,
                    target_audience: None,
                    title: format!("advisory {}", i),
                    content: "rain expected".to_string(),
                    priority: Priority::Medium,
                    valid_until: None,
                    created_at: at,
                })
                .await
                .unwrap();
        }

        let recent = store.recent_advisories(5).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].title, "advisory 6");
        assert_eq!(recent[4].title, "advisory 2");
    }
}
