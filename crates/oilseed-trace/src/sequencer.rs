// crates/oilseed-trace/src/sequencer.rs
//
// Last-result-wins sequencing for lookups issued from the presentation
// layer. A new lookup issued while one is pending supersedes it for
// display: the superseded request is not cancelled, but its result is
// discarded if a newer request's result has already been applied.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing tickets and decides which results
/// may be applied. Lock-free; safe to share between tasks.
#[derive(Debug, Default)]
pub struct LookupSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl LookupSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a new lookup. Tickets start at 1.
    pub fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Try to apply the result for `ticket`. Returns `true` iff no newer
    /// ticket's result has been applied; a `false` means the caller must
    /// discard this result.
    pub fn apply(&self, ticket: u64) -> bool {
        let prev = self.applied.fetch_max(ticket, Ordering::SeqCst);
        ticket > prev
    }
}
