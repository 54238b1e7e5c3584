//! Structural invariant checks.

use crate::common::{Error, RecordId, Result, Violation};
use crate::index::avl::node::Node;
use crate::index::OrderedIndex;

impl OrderedIndex {
    /// Walk the whole tree and verify every structural invariant.
    ///
    /// Checks strict key ordering, the AVL balance condition, cached
    /// heights, and the record count. Returns the first violation found.
    /// O(n); meant for tests and debugging, not for hot paths.
    pub fn validate(&self) -> Result<()> {
        let (_, count) = match self.root() {
            Some(root) => check(root, None, None)?,
            None => (0, 0),
        };

        if count != self.len() {
            let id = self.root().map_or(RecordId::new(0), Node::id);
            return Err(Error::InvariantViolation {
                id,
                kind: Violation::Count,
            });
        }
        Ok(())
    }
}

/// Check the subtree under `node`, whose keys must lie strictly inside
/// `(lower, upper)`. Returns its real height and node count.
fn check(node: &Node, lower: Option<RecordId>, upper: Option<RecordId>) -> Result<(u32, usize)> {
    let id = node.id();
    let violation = |kind| Error::InvariantViolation { id, kind };

    if lower.is_some_and(|low| id <= low) || upper.is_some_and(|high| id >= high) {
        return Err(violation(Violation::Ordering));
    }

    let (left_height, left_count) = match node.left() {
        Some(left) => check(left, lower, Some(id))?,
        None => (0, 0),
    };
    let (right_height, right_count) = match node.right() {
        Some(right) => check(right, Some(id), upper)?,
        None => (0, 0),
    };

    let height = 1 + left_height.max(right_height);
    if node.height() != height {
        return Err(violation(Violation::Height));
    }
    if left_height.abs_diff(right_height) > 1 {
        return Err(violation(Violation::Balance));
    }

    Ok((height, left_count + right_count + 1))
}
