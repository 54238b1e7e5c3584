//! AVL tree backing the employee index.
//!
//! # Insertion
//! Insertion descends recursively through `&mut Link` slots and fixes
//! balance while the recursion unwinds, so every ancestor on the path
//! is re-examined bottom-up:
//!
//! ```text
//!   insert 30 into 10 -> 20          unwind at 10: balance = -2
//!
//!     10                               20
//!       \          Right-Right        /  \
//!        20        ==========>      10    30
//!          \
//!           30
//! ```
//!
//! # Cases
//! | balance | new key vs taller child | case        |
//! |---------|-------------------------|-------------|
//! | `> 1`   | less                    | Left-Left   |
//! | `> 1`   | greater                 | Left-Right  |
//! | `< -1`  | greater                 | Right-Right |
//! | `< -1`  | less                    | Right-Left  |

mod iter;
mod node;
mod validate;

use std::cmp::Ordering;
use std::sync::atomic::Ordering as AtomicOrdering;

use log::{debug, trace};

use crate::common::RecordId;
use crate::index::{IndexStats, Record};

pub use iter::Iter;
pub use node::{Node, Rotation};

use node::Link;

/// Result of [`OrderedIndex::insert`].
///
/// A duplicate id is an expected outcome, not an error. The caller
/// decides how to report it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node now holds the record.
    Inserted,
    /// The id was already present; the index is unchanged.
    DuplicateId,
}

impl InsertOutcome {
    #[inline]
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// An in-memory ordered index of employee records.
///
/// Keys are unique [`RecordId`]s. Every mutation leaves the tree
/// height-balanced, so lookups are O(log n).
///
/// # Thread Safety
/// Insertion takes `&mut self`; wrap the index in a
/// [`SharedIndex`](crate::SharedIndex) to share it between threads.
///
/// # Example
/// ```
/// use employeedb::{InsertOutcome, OrderedIndex, Record, RecordId};
///
/// let mut index = OrderedIndex::new();
/// assert_eq!(index.insert(Record::new(20, "Bo", "Clerk")), InsertOutcome::Inserted);
/// assert_eq!(index.insert(Record::new(10, "Al", "Lead")), InsertOutcome::Inserted);
/// assert_eq!(index.insert(Record::new(20, "Cy", "Temp")), InsertOutcome::DuplicateId);
///
/// assert_eq!(index.lookup(RecordId::new(20)).unwrap().name(), "Bo");
/// let ids: Vec<i32> = index.iter().map(|r| r.id().0).collect();
/// assert_eq!(ids, vec![10, 20]);
/// ```
#[derive(Debug, Default)]
pub struct OrderedIndex {
    root: Link,
    len: usize,
    stats: IndexStats,
}

impl OrderedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert a record, rejecting it if its id is already present.
    ///
    /// On [`InsertOutcome::DuplicateId`] the tree is left exactly as it
    /// was (same shape, same heights) and `record` is dropped.
    pub fn insert(&mut self, record: Record) -> InsertOutcome {
        let id = record.id();
        let outcome = insert_into(&mut self.root, record, &self.stats);

        match outcome {
            InsertOutcome::Inserted => {
                self.len += 1;
                self.stats.inserts.fetch_add(1, AtomicOrdering::Relaxed);
                debug!("inserted record {} (len={})", id, self.len);
            }
            InsertOutcome::DuplicateId => {
                self.stats.duplicates.fetch_add(1, AtomicOrdering::Relaxed);
                debug!("rejected duplicate record {}", id);
            }
        }
        outcome
    }

    // ========================================================================
    // Public API: Read
    // ========================================================================

    /// Find the record with `id`, or `None` if no such record exists.
    pub fn lookup(&self, id: RecordId) -> Option<&Record> {
        let found = self.find(id);
        self.stats.record_lookup(found.is_some());
        found.map(Node::record)
    }

    /// Whether a record with `id` exists. Does not touch the lookup counters.
    pub fn contains(&self, id: RecordId) -> bool {
        self.find(id).is_some()
    }

    /// Descend from the root to the node holding `id`.
    fn find(&self, id: RecordId) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.id()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Enumerate all records in ascending id order.
    ///
    /// The traversal is lazy and borrows the index; calling `iter` again
    /// restarts from the smallest id.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Number of records held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 when empty, 1 for a single record.
    #[inline]
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Root node, for inspecting the tree's shape.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Operation counters for this index.
    #[inline]
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insert `record` somewhere below `slot`, rebalancing on the way back up.
fn insert_into(slot: &mut Link, record: Record, stats: &IndexStats) -> InsertOutcome {
    let key = record.id();

    let node = match slot {
        Some(node) => node,
        None => {
            *slot = Some(Box::new(Node::new(record)));
            return InsertOutcome::Inserted;
        }
    };

    let outcome = match key.cmp(&node.id()) {
        Ordering::Less => insert_into(node.left_mut(), record, stats),
        Ordering::Greater => insert_into(node.right_mut(), record, stats),
        Ordering::Equal => InsertOutcome::DuplicateId,
    };

    if outcome.is_inserted() {
        if let Some(node) = slot.take() {
            let pivot = node.id();
            let (subtree, rotation) = node.rebalance(key);
            if let Some(rotation) = rotation {
                trace!(
                    "{:?} rotation at {} after inserting {}; new subtree root {}",
                    rotation,
                    pivot,
                    key,
                    subtree.id()
                );
                stats.record_rotation(rotation);
            }
            *slot = Some(subtree);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(ids: &[i32]) -> OrderedIndex {
        let mut index = OrderedIndex::new();
        for &id in ids {
            let _ = index.insert(Record::new(id, format!("emp{}", id), "Engineer"));
        }
        index
    }

    fn ids(index: &OrderedIndex) -> Vec<i32> {
        index.iter().map(|r| r.id().0).collect()
    }

    #[test]
    fn test_empty_index() {
        let index = OrderedIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert!(index.root().is_none());
        assert!(index.lookup(RecordId::new(42)).is_none());
        assert_eq!(index.iter().next(), None);
    }

    #[test]
    fn test_right_right_case_at_root() {
        let index = index_of(&[10, 20, 30]);
        let root = index.root().unwrap();
        assert_eq!(root.id(), RecordId::new(20));
        assert_eq!(root.height(), 2);
        assert_eq!(root.left().unwrap().height(), 1);
        assert_eq!(root.right().unwrap().height(), 1);
        assert_eq!(index.stats().snapshot().single_rotations, 1);
    }

    #[test]
    fn test_left_left_case_at_root() {
        let index = index_of(&[30, 20, 10]);
        let root = index.root().unwrap();
        assert_eq!(root.id(), RecordId::new(20));
        assert_eq!(root.left().unwrap().id(), RecordId::new(10));
        assert_eq!(root.right().unwrap().id(), RecordId::new(30));
    }

    #[test]
    fn test_right_left_case_at_root() {
        let index = index_of(&[10, 30, 20]);
        let root = index.root().unwrap();
        assert_eq!(root.id(), RecordId::new(20));
        assert_eq!(root.height(), 2);
        assert_eq!(index.stats().snapshot().double_rotations, 1);
    }

    #[test]
    fn test_rotation_below_root() {
        // 40 at the root stays put; the fix-up happens at 20.
        let index = index_of(&[40, 20, 50, 10, 5]);
        let root = index.root().unwrap();
        assert_eq!(root.id(), RecordId::new(40));
        let left = root.left().unwrap();
        assert_eq!(left.id(), RecordId::new(10));
        assert_eq!(left.left().unwrap().id(), RecordId::new(5));
        assert_eq!(left.right().unwrap().id(), RecordId::new(20));
        assert_eq!(root.height(), 3);
        assert!(index.validate().is_ok());
    }

    #[test]
    fn test_duplicate_is_rejected_and_keeps_first_record() {
        let mut index = OrderedIndex::new();
        assert_eq!(
            index.insert(Record::new(5, "First", "Analyst")),
            InsertOutcome::Inserted
        );
        assert_eq!(
            index.insert(Record::new(5, "Second", "Manager")),
            InsertOutcome::DuplicateId
        );

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(RecordId::new(5)).unwrap().name(), "First");

        let snapshot = index.stats().snapshot();
        assert_eq!(snapshot.inserts, 1);
        assert_eq!(snapshot.duplicates, 1);
    }

    #[test]
    fn test_lookup_counts_hits_and_misses() {
        let index = index_of(&[1, 2, 3]);
        assert!(index.lookup(RecordId::new(2)).is_some());
        assert!(index.lookup(RecordId::new(9)).is_none());
        assert!(index.contains(RecordId::new(3)));

        let snapshot = index.stats().snapshot();
        assert_eq!(snapshot.lookup_hits, 1);
        assert_eq!(snapshot.lookup_misses, 1);
    }

    #[test]
    fn test_contains_agrees_with_lookup_without_counting() {
        let index = index_of(&[40, 20, 60, 10, 30, 50, 70]);
        for id in 5..75 {
            let id = RecordId::new(id);
            assert_eq!(index.contains(id), index.lookup(id).is_some());
        }

        // Only the lookups above were counted, not the contains calls.
        let snapshot = index.stats().snapshot();
        assert_eq!(snapshot.lookup_hits, 7);
        assert_eq!(snapshot.lookup_misses, 63);
    }

    #[test]
    fn test_iter_is_restartable_and_sized() {
        let index = index_of(&[50, 25, 75, 10, 30]);
        assert_eq!(ids(&index), vec![10, 25, 30, 50, 75]);
        assert_eq!(ids(&index), vec![10, 25, 30, 50, 75]);

        let mut iter = index.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);

        let via_ref: Vec<i32> = (&index).into_iter().map(|r| r.id().0).collect();
        assert_eq!(via_ref, ids(&index));
    }

    #[test]
    fn test_sequential_inserts_stay_balanced() {
        let keys: Vec<i32> = (0..1024).collect();
        let index = index_of(&keys);
        // A perfectly filled tree of 1023 nodes has height 10.
        assert_eq!(index.height(), 11);
        assert!(index.validate().is_ok());
    }
}
