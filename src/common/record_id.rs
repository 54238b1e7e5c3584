//! Record identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies an employee record; the sort and search key of the index.
///
/// Signed 32-bit, so negative ids are legal keys and order below zero.
///
/// # Example
/// ```
/// use employeedb::RecordId;
///
/// let id: RecordId = " 42 ".parse().unwrap();
/// assert_eq!(id, RecordId::new(42));
/// assert!(RecordId::new(-1) < id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i32);

impl RecordId {
    /// Create a new RecordId.
    #[inline]
    pub fn new(id: i32) -> Self {
        RecordId(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        RecordId(id)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    /// Parse an id from user input, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(RecordId)
            .map_err(|_| Error::InvalidRecordId(s.trim().to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
