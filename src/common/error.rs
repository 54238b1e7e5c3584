//! Error types for employeedb.

use thiserror::Error;

use crate::common::RecordId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in employeedb.
///
/// Duplicate inserts and missed lookups are NOT errors: they come back as
/// [`InsertOutcome::DuplicateId`](crate::InsertOutcome) and `None`.
/// This enum covers the surfaces around the index.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while the shell reads input or writes output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text that could not be parsed as a record id.
    #[error("Invalid employee ID: {0}")]
    InvalidRecordId(String),

    /// The tree broke one of its structural invariants.
    ///
    /// This indicates a bug in the balancing code, never bad input.
    #[error("invariant violated at {id}: {kind}")]
    InvariantViolation { id: RecordId, kind: Violation },
}

/// Which structural invariant a node broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A key in a subtree is on the wrong side of its ancestor.
    Ordering,
    /// Child heights differ by more than one.
    Balance,
    /// Cached height disagrees with the children.
    Height,
    /// The tree holds a different number of nodes than it counted.
    Count,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Violation::Ordering => "key out of order",
            Violation::Balance => "subtree heights differ by more than one",
            Violation::Height => "stale cached height",
            Violation::Count => "node count mismatch",
        };
        f.write_str(text)
    }
}
