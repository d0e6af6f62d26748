// crates/oilseed-store/src/lib.rs
//
// oilseed-store: Storage layer for the Oilseed Value Chain Platform.
//
// Provides a RocksDB-backed implementation of the RecordStore trait and
// an in-memory implementation backing tests and the CLI's ephemeral mode.
// Both honor the same ordering contract: traceability rows come back in
// (timestamp, id)-ascending order, scoped lists come back newest first.

pub mod memory;
pub mod rocks;

pub use memory::MemoryStore;
pub use rocks::RocksStore;
