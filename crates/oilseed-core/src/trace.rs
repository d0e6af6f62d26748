// crates/oilseed-core/src/trace.rs
//
// Traceability records: one row per custody/process event in a batch's
// history. Records for a batch form an append-only, hash-linked chain:
// each record's `hash` fingerprints its own immutable fields plus the
// predecessor's hash, so recomputation detects both field tampering and
// broken linkage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::profile::{Location, UserRole};

/// Supply-chain stage of a traceability event.
///
///   Farm --> Procurement --> Storage --> Processing --> Retail
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Farm,
    Procurement,
    Storage,
    Processing,
    Retail,
}

impl Stage {
    /// Stable, compact tag used in index keys and in the hash preimage.
    pub fn tag(&self) -> &'static str {
        match self {
            Stage::Farm => "farm",
            Stage::Procurement => "procurement",
            Stage::Storage => "storage",
            Stage::Processing => "processing",
            Stage::Retail => "retail",
        }
    }
}

/// One event in a batch's custody/processing history.
///
/// Immutable once written; there is no update or delete path for
/// traceability rows anywhere in the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceabilityRecord {
    pub id: Uuid,
    /// Groups records into one logical shipment/lot. Not unique per record.
    pub batch_id: String,
    pub crop_id: Option<Uuid>,
    pub inventory_id: Option<Uuid>,
    pub stage: Stage,
    /// Who performed the action. Joined with the profile table on read.
    pub actor_id: Uuid,
    /// When the action occurred. Records for a batch are ordered by this
    /// field ascending, ties broken by id.
    pub timestamp: DateTime<Utc>,
    pub location: Option<Location>,
    /// Free-text description of what happened.
    pub action: String,
    /// Hex-encoded SHA-256 fingerprint of this record (see `compute_hash`).
    pub hash: String,
    /// The `hash` of the chronologically preceding record for the same
    /// batch, or `None` iff this is the first record.
    pub previous_hash: Option<String>,
    /// Closed-vocabulary auxiliary attributes. Sorted map so the hash
    /// preimage is canonical.
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl TraceabilityRecord {
    /// Compute the hash preimage for this record.
    ///
    /// Covers the immutable fields in a fixed order, then `previous_hash`.
    /// A unit separator after each field keeps adjacent free-text fields
    /// from colliding ("ab" + "c" vs "a" + "bc").
    pub fn signable_bytes(&self) -> Vec<u8> {
        const SEP: &[u8] = &[0x1f];

        let mut hasher = Sha256::new();

        hasher.update(self.batch_id.as_bytes());
        hasher.update(SEP);
        hasher.update(self.stage.tag().as_bytes());
        hasher.update(SEP);
        hasher.update(self.actor_id.as_bytes());
        hasher.update(SEP);
        hasher.update(self.timestamp.to_rfc3339().as_bytes());
        hasher.update(SEP);
        hasher.update(self.action.as_bytes());
        hasher.update(SEP);
        if let Some(loc) = &self.location {
            hasher.update(loc.district.as_bytes());
            hasher.update(SEP);
            hasher.update(loc.state.as_bytes());
        }
        hasher.update(SEP);
        // BTreeMap iteration is key-sorted, so the preimage is canonical.
        for (key, value) in &self.metadata {
            hasher.update(key.as_bytes());
            hasher.update(SEP);
            hasher.update(value.as_bytes());
            hasher.update(SEP);
        }
        if let Some(prev) = &self.previous_hash {
            hasher.update(prev.as_bytes());
        }

        hasher.finalize().to_vec()
    }

    /// Recompute this record's content fingerprint from its fields.
    pub fn compute_hash(&self) -> String {
        hex::encode(self.signable_bytes())
    }

    /// Whether the stored `hash` matches a recomputation from the fields.
    pub fn hash_matches(&self) -> bool {
        self.hash == self.compute_hash()
    }
}

/// A traceability record joined with its actor's profile fields, as
/// retrieved by the record store for display and verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracedRecord {
    pub record: TraceabilityRecord,
    pub actor_name: String,
    pub actor_role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(previous_hash: Option<String>) -> TraceabilityRecord {
        let now = Utc::now();
        let mut record = TraceabilityRecord {
            id: Uuid::now_v7(),
            batch_id: "BATCH-SOY-2024-001".to_string(),
            crop_id: None,
            inventory_id: None,
            stage: Stage::Farm,
            actor_id: Uuid::now_v7(),
            timestamp: now,
            location: Some(Location {
                district: "Indore".to_string(),
                state: "Madhya Pradesh".to_string(),
            }),
            action: "Harvested 1200 kg soybean".to_string(),
            hash: String::new(),
            previous_hash,
            metadata: BTreeMap::new(),
            created_at: now,
        };
        record.hash = record.compute_hash();
        record
    }

    #[test]
    fn test_hash_is_deterministic() {
        let record = make_record(None);
        assert_eq!(record.compute_hash(), record.compute_hash());
        assert!(record.hash_matches());
    }

    #[test]
    fn test_hash_covers_action() {
        let mut record = make_record(None);
        record.action = "Harvested 9999 kg soybean".to_string();
        assert!(!record.hash_matches());
    }

    #[test]
    fn test_hash_covers_previous_hash() {
        let mut record = make_record(Some("a".repeat(64)));
        record.previous_hash = Some("b".repeat(64));
        assert!(!record.hash_matches());
    }

    #[test]
    fn test_hash_covers_metadata() {
        let mut record = make_record(None);
        record
            .metadata
            .insert("quality_grade".to_string(), "A".to_string());
        assert!(!record.hash_matches());
    }

    #[test]
    fn test_hash_is_64_hex_chars() {
        let record = make_record(None);
        assert_eq!(record.hash.len(), 64);
        assert!(record.hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_adjacent_fields_do_not_collide() {
        // Moving a character across the action/location boundary must
        // change the preimage.
        let mut a = make_record(None);
        a.action = "dried".to_string();
        a.location = Some(Location {
            district: "Akola".to_string(),
            state: "Maharashtra".to_string(),
        });
        let mut b = a.clone();
        b.action = "driedA".to_string();
        b.location = Some(Location {
            district: "kola".to_string(),
            state: "Maharashtra".to_string(),
        });
        assert_ne!(a.compute_hash(), b.compute_hash());
    }
}
