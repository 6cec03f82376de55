//! Duplicate detection by event identity
//!
//! One `Deduplicator` is owned by one pipeline run; the identity set is
//! bounded only by the input size and discarded with the run.

use std::collections::HashSet;

use crate::record::Record;

/// Outcome of the identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    New,
    Duplicate,
}

/// Tracks the event ids seen so far in the current run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<i64>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a record by identity, recording new ids as seen.
    ///
    /// Identity comparison is total: a record without an `eventId` is never
    /// equal to any other record, so it always classifies `New` and leaves
    /// the set untouched.
    pub fn classify(&mut self, record: &Record) -> Classification {
        match record.event_id {
            Some(id) if self.seen.insert(id) => Classification::New,
            Some(_) => Classification::Duplicate,
            None => Classification::New,
        }
    }
}
