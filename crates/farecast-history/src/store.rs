//! Newest-first bounded history store.

use crate::record::{HistoryRecord, RecordId};
use std::collections::VecDeque;

/// Maximum number of records kept in a [`HistoryStore`].
pub const HISTORY_CAPACITY: usize = 5;

/// Ordered collection of recent estimates, newest first.
///
/// Holds at most [`HISTORY_CAPACITY`] records. Inserting into a full store
/// evicts the oldest record.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: VecDeque<HistoryRecord>,
}

impl HistoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Inserts a record at the front, returning the evicted record if the
    /// store was already full.
    pub fn record_estimate(&mut self, record: HistoryRecord) -> Option<HistoryRecord> {
        tracing::info!(
            id = %record.id(),
            provider = %record.provider(),
            fare = %record.fare(),
            "recorded estimate"
        );
        self.records.push_front(record);

        if self.records.len() > HISTORY_CAPACITY {
            let evicted = self.records.pop_back();
            if let Some(old) = &evicted {
                tracing::debug!(id = %old.id(), "evicted oldest history record");
            }
            evicted
        } else {
            None
        }
    }

    /// Iterates over records, newest first.
    pub fn list(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Returns an owned copy of the records, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.records.iter().cloned().collect()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    /// Returns the number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
