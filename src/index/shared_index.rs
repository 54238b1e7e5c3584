//! SharedIndex - an [`OrderedIndex`] that many threads can use at once.
//!
//! The tree itself is not built for concurrent mutation: an insert may
//! rotate any node on the root-to-leaf path. So the whole tree sits
//! behind one `RwLock`:
//! - inserts hold the write lock for exactly one insert call
//! - lookups and enumeration share the read lock

use parking_lot::{RwLock, RwLockReadGuard};

use crate::common::RecordId;
use crate::index::{InsertOutcome, OrderedIndex, Record, StatsSnapshot};

/// Thread-safe wrapper around [`OrderedIndex`].
///
/// # Example
/// ```
/// use employeedb::{Record, RecordId, SharedIndex};
/// use std::sync::Arc;
/// use std::thread;
///
/// let index = Arc::new(SharedIndex::new());
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let index = Arc::clone(&index);
///         thread::spawn(move || index.insert(Record::new(i, "worker", "Ops")))
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().unwrap().is_inserted());
/// }
/// assert_eq!(index.len(), 4);
/// assert!(index.lookup(RecordId::new(2)).is_some());
/// ```
#[derive(Debug, Default)]
pub struct SharedIndex {
    inner: RwLock<OrderedIndex>,
}

impl SharedIndex {
    /// Create an empty shared index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the write lock. See [`OrderedIndex::insert`].
    pub fn insert(&self, record: Record) -> InsertOutcome {
        self.inner.write().insert(record)
    }

    /// Look up under the read lock, returning an owned copy of the record.
    pub fn lookup(&self, id: RecordId) -> Option<Record> {
        self.inner.read().lookup(id).cloned()
    }

    /// All records in ascending id order, copied out under one read lock.
    pub fn records(&self) -> Vec<Record> {
        self.inner.read().iter().cloned().collect()
    }

    /// Borrow the index for reading without copying records.
    ///
    /// Inserts from other threads block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, OrderedIndex> {
        self.inner.read()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }

    /// Unwrap into the plain index.
    pub fn into_inner(self) -> OrderedIndex {
        self.inner.into_inner()
    }
}

impl From<OrderedIndex> for SharedIndex {
    fn from(index: OrderedIndex) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_insert_and_lookup() {
        let index = SharedIndex::new();
        assert!(index.is_empty());
        assert!(index.insert(Record::new(1, "Ann", "QA")).is_inserted());
        assert_eq!(
            index.insert(Record::new(1, "Ann", "QA")),
            InsertOutcome::DuplicateId
        );

        let found = index.lookup(RecordId::new(1)).unwrap();
        assert_eq!(found.designation(), "QA");
        assert!(index.lookup(RecordId::new(2)).is_none());
        assert_eq!(index.stats().duplicates, 1);
    }

    #[test]
    fn test_read_guard_borrows_records() {
        let index = SharedIndex::new();
        for id in [3, 1, 2] {
            let _ = index.insert(Record::new(id, "x", "y"));
        }

        let guard = index.read();
        let ids: Vec<i32> = guard.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_trip_through_plain_index() {
        let mut plain = OrderedIndex::new();
        let _ = plain.insert(Record::new(9, "Zed", "Intern"));

        let shared = SharedIndex::from(plain);
        assert_eq!(shared.records().len(), 1);

        let plain = shared.into_inner();
        assert_eq!(plain.len(), 1);
    }
}
