// crates/oilseed-trace/src/display.rs
//
// Display tuples for the presentation layer. Truncation of the hash is
// display-only: the stored and verified value is never truncated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use oilseed_core::profile::UserRole;
use oilseed_core::trace::{Stage, TracedRecord};

/// How many hex characters of the record hash the presentation shows.
pub const HASH_DISPLAY_LEN: usize = 16;

/// One record of a batch chain, shaped for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEntry {
    pub stage: Stage,
    pub action: String,
    pub actor_name: String,
    pub actor_role: UserRole,
    pub timestamp: DateTime<Utc>,
    /// "district, state" when the record carries a location.
    pub location: Option<String>,
    /// Fixed-length prefix of the full record hash.
    pub hash_prefix: String,
}

impl ChainEntry {
    fn from_record(traced: &TracedRecord) -> Self {
        let record = &traced.record;
        Self {
            stage: record.stage,
            action: record.action.clone(),
            actor_name: traced.actor_name.clone(),
            actor_role: traced.actor_role,
            timestamp: record.timestamp,
            location: record.location.as_ref().map(|loc| loc.to_string()),
            hash_prefix: record.hash.chars().take(HASH_DISPLAY_LEN).collect(),
        }
    }
}

/// Shape an ordered record sequence for display, preserving order.
pub fn entries(records: &[TracedRecord]) -> Vec<ChainEntry> {
    records.iter().map(ChainEntry::from_record).collect()
}
