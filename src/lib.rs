//! employeedb - An in-memory employee index backed by an AVL tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          employeedb                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Shell (shell/)                          │   │
//! │  │     menu loop: read choice → call index → print          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        SharedIndex (index/)  [optional RwLock wrapper]   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              OrderedIndex (index/avl/)                   │   │
//! │  │   insert → descend → attach leaf → rebalance on unwind   │   │
//! │  │   lookup → descend            iter → in-order stack walk │   │
//! │  │                   IndexStats (atomic)                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (RecordId, Error, config)
//! - [`index`] - The ordered index, its records, and statistics
//! - [`shell`] - Line-oriented menu front end
//!
//! # Quick Start
//! ```
//! use employeedb::{InsertOutcome, OrderedIndex, Record, RecordId};
//!
//! let mut index = OrderedIndex::new();
//! for (id, name) in [(10, "Ana"), (20, "Ben"), (30, "Cai")] {
//!     assert_eq!(index.insert(Record::new(id, name, "Analyst")), InsertOutcome::Inserted);
//! }
//!
//! // Ascending inserts rotated 20 to the root.
//! assert_eq!(index.root().unwrap().id(), RecordId::new(20));
//! assert_eq!(index.lookup(RecordId::new(30)).unwrap().name(), "Cai");
//! ```

pub mod common;
pub mod index;
pub mod shell;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, RecordId, Result};

pub use index::{
    IndexStats, InsertOutcome, Iter, Node, OrderedIndex, Record, Rotation, SharedIndex,
    StatsSnapshot,
};
