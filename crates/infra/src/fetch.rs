//! Stale-fetch guard.
//!
//! When two fetches for the same logical list race, last-resolved used to
//! win; the sequencer makes last-*issued* win instead. A caller takes a
//! ticket before fetching and only applies the result if the ticket is still
//! the newest one issued for that list.

use std::collections::HashMap;
use std::sync::Mutex;

/// A ticket for one in-flight fetch of a named list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: String,
    seq: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Per-list monotonic ticket counter.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: Mutex<HashMap<String, u64>>,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a fetch of `key`, superseding every earlier one.
    pub fn begin(&self, key: impl Into<String>) -> FetchTicket {
        let key = key.into();
        let mut issued = match self.issued.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let seq = issued.entry(key.clone()).or_insert(0);
        *seq += 1;
        FetchTicket { key, seq: *seq }
    }

    /// True iff `ticket` is still the newest issued for its list, i.e. the
    /// completed fetch may be applied.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        let issued = match self.issued.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        issued.get(&ticket.key).copied() == Some(ticket.seq)
    }

    /// Drop a list's counter entirely (e.g. when its session ends).
    pub fn forget(&self, key: &str) {
        let mut issued = match self.issued.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        issued.remove(key);
    }
}
