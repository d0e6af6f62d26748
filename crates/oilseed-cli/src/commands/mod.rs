// crates/oilseed-cli/src/commands/mod.rs
//
// Command module declarations for the Oilseed CLI.

pub mod analytics;
pub mod credit;
pub mod dashboard;
pub mod seed;
pub mod trace;
pub mod views;

use std::sync::Arc;

use oilseed_core::traits::RecordStore;
use oilseed_store::RocksStore;

use crate::config::CliConfig;

/// Open the configured local store.
pub fn open_store(config: &CliConfig) -> Result<Arc<dyn RecordStore>, Box<dyn std::error::Error>> {
    let store = RocksStore::open(&config.data_dir)?;
    Ok(Arc::new(store))
}
