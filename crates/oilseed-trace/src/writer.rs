// crates/oilseed-trace/src/writer.rs
//
// The single append path for traceability records. A record is created
// exactly once, by the actor performing the stage transition, and links
// to the current tail of its batch via the tail's stored hash.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use oilseed_core::error::PlatformError;
use oilseed_core::profile::{Location, Profile};
use oilseed_core::trace::{Stage, TraceabilityRecord};
use oilseed_core::traits::RecordStore;

/// Input for one chain append.
#[derive(Debug, Clone)]
pub struct NewChainEvent {
    pub batch_id: String,
    pub crop_id: Option<Uuid>,
    pub inventory_id: Option<Uuid>,
    pub stage: Stage,
    pub action: String,
    pub location: Option<Location>,
    pub metadata: BTreeMap<String, String>,
    /// When the action occurred. `None` stamps the current time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewChainEvent {
    pub fn new(batch_id: &str, stage: Stage, action: &str) -> Self {
        Self {
            batch_id: batch_id.to_string(),
            crop_id: None,
            inventory_id: None,
            stage,
            action: action.to_string(),
            location: None,
            metadata: BTreeMap::new(),
            timestamp: None,
        }
    }
}

/// Appends hash-linked records to batch chains.
pub struct ChainWriter {
    store: Arc<dyn RecordStore>,
}

impl ChainWriter {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Append one event to its batch's chain, as the given actor.
    ///
    /// Reads the batch tail, stamps the new record with a hash over its
    /// own fields plus the tail's hash, and inserts it. Rejects empty
    /// batch ids (and ids containing `:`, reserved by the store's key
    /// format) and timestamps at or before the tail's, preserving the
    /// strict time order of the chain.
    pub async fn append(
        &self,
        actor: &Profile,
        event: NewChainEvent,
    ) -> Result<TraceabilityRecord, PlatformError> {
        let batch_id = event.batch_id.trim();
        if batch_id.is_empty() {
            return Err(PlatformError::InvalidInput(
                "batch id must not be empty".to_string(),
            ));
        }
        if batch_id.contains(':') {
            return Err(PlatformError::InvalidInput(
                "batch id must not contain ':'".to_string(),
            ));
        }

        let timestamp = event.timestamp.unwrap_or_else(Utc::now);
        let tail = self.store.tail_of_batch(batch_id).await?;

        let previous_hash = match &tail {
            Some(tail) => {
                if timestamp <= tail.timestamp {
                    return Err(PlatformError::InvalidInput(format!(
                        "timestamp {} is not after the batch tail at {}",
                        timestamp.to_rfc3339(),
                        tail.timestamp.to_rfc3339()
                    )));
                }
                Some(tail.hash.clone())
            }
            None => None,
        };

        let mut record = TraceabilityRecord {
            id: Uuid::now_v7(),
            batch_id: batch_id.to_string(),
            crop_id: event.crop_id,
            inventory_id: event.inventory_id,
            stage: event.stage,
            actor_id: actor.id,
            timestamp,
            location: event.location,
            action: event.action,
            hash: String::new(),
            previous_hash,
            metadata: event.metadata,
            created_at: Utc::now(),
        };
        record.hash = record.compute_hash();

        self.store.append_traceability(&record).await?;
        info!(
            batch_id,
            stage = record.stage.tag(),
            record_id = %record.id,
            "appended traceability record"
        );
        Ok(record)
    }
}
