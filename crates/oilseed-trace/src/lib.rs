// crates/oilseed-trace/src/lib.rs
//
// oilseed-trace: The traceability core of the platform.
//
// Given a batch identifier, the reader retrieves the batch's custody
// events from the record store, verifies them as a hash-linked chain,
// and exposes display tuples for the presentation layer. The writer is
// the single append path that stamps new records with their chain hash.

pub mod display;
pub mod reader;
pub mod sequencer;
pub mod writer;

pub use display::{entries, ChainEntry, HASH_DISPLAY_LEN};
pub use reader::{verify_chain, ChainReader, ChainReport, ChainResult, LinkBreak};
pub use sequencer::LookupSequencer;
pub use writer::{ChainWriter, NewChainEvent};
