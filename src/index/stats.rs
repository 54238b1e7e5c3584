//! Index operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::index::Rotation;

/// Counters tracked by an [`OrderedIndex`](crate::OrderedIndex).
///
/// All fields are atomic so that lookups, which only borrow the index
/// shared, can still count hits and misses. Behind a
/// [`SharedIndex`](crate::SharedIndex) many readers bump them at once.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - We don't need synchronization between different counters
/// - Statistics are "eventually consistent" - exact ordering doesn't matter
///
/// # Example
/// ```
/// use employeedb::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.lookup_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.lookup_hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct IndexStats {
    /// Records successfully inserted.
    pub inserts: AtomicU64,

    /// Inserts rejected because the id was already present.
    pub duplicates: AtomicU64,

    /// Lookups that found a record.
    pub lookup_hits: AtomicU64,

    /// Lookups for ids not in the index.
    pub lookup_misses: AtomicU64,

    /// Left-Left and Right-Right fix-ups.
    pub single_rotations: AtomicU64,

    /// Left-Right and Right-Left fix-ups.
    pub double_rotations: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            duplicates: AtomicU64::new(0),
            lookup_hits: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
            single_rotations: AtomicU64::new(0),
            double_rotations: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_rotation(&self, rotation: Rotation) {
        if rotation.is_double() {
            self.double_rotations.fetch_add(1, Ordering::Relaxed);
        } else {
            self.single_rotations.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_lookup(&self, found: bool) {
        if found {
            self.lookup_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicates: self.duplicates.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            single_rotations: self.single_rotations.load(Ordering::Relaxed),
            double_rotations: self.double_rotations.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.duplicates.store(0, Ordering::Relaxed);
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
        self.single_rotations.store(0, Ordering::Relaxed);
        self.double_rotations.store(0, Ordering::Relaxed);
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of index statistics.
///
/// Unlike `IndexStats`, this is not atomic and can be safely
/// printed, compared, copied, etc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub duplicates: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub single_rotations: u64,
    pub double_rotations: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found a record (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }

    /// Total rotation cases applied.
    pub fn rotations(&self) -> u64 {
        self.single_rotations + self.double_rotations
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, duplicates: {}, rotations: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.duplicates,
            self.rotations(),
            self.hit_rate() * 100.0
        )
    }
}
