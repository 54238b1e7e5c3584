//! Employee record stored in the index.

use std::fmt;

use crate::common::RecordId;

/// One employee: an id plus two opaque text fields.
///
/// Records are immutable once built; the index only ever moves them
/// between nodes, never edits them.
///
/// # Example
/// ```
/// use employeedb::Record;
///
/// let record = Record::new(7, "Ada", "Engineer");
/// assert_eq!(record.to_string(), "ID: 7, Name: Ada, Designation: Engineer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    designation: String,
}

impl Record {
    /// Create a new record.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        designation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            designation: designation.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Designation: {}",
            self.id, self.name, self.designation
        )
    }
}
