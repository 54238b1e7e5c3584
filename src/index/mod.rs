//! Ordered employee index.
//!
//! # Components
//! - [`OrderedIndex`] - The AVL tree: insert, lookup, ordered enumeration
//! - [`Record`] - The stored value
//! - [`SharedIndex`] - `RwLock` wrapper for multi-threaded callers
//! - [`IndexStats`] - Operation counters

mod avl;
mod record;
mod shared_index;
mod stats;

pub use avl::{InsertOutcome, Iter, Node, OrderedIndex, Rotation};
pub use record::Record;
pub use shared_index::SharedIndex;
pub use stats::{IndexStats, StatsSnapshot};
