//! Node - one record plus its two subtrees.
//!
//! A [`Node`] exclusively owns its children through [`Link`]s, so the
//! tree is a strict hierarchy: every node has exactly one owner (its
//! parent, or the index's root slot).
//!
//! Rotations consume a boxed node and hand back the new subtree root.
//! Only child links and cached heights change; records never move
//! between nodes.

use std::cmp::Ordering;

use crate::common::RecordId;
use crate::index::Record;

/// An owned, possibly empty subtree.
pub(crate) type Link = Option<Box<Node>>;

/// Which of the four rebalancing cases fired at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left child's left subtree grew: single right rotation.
    LeftLeft,
    /// Right child's right subtree grew: single left rotation.
    RightRight,
    /// Left child's right subtree grew: left then right rotation.
    LeftRight,
    /// Right child's left subtree grew: right then left rotation.
    RightLeft,
}

impl Rotation {
    /// Whether this case needs two rotations.
    #[inline]
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LeftRight | Rotation::RightLeft)
    }
}

/// A node in the AVL tree.
///
/// # Height
/// `height` counts nodes on the longest downward path, so a leaf has
/// height 1 and a missing child counts as 0.
#[derive(Debug)]
pub struct Node {
    record: Record,
    left: Link,
    right: Link,
    height: u32,
}

impl Node {
    /// Create a leaf holding `record`.
    pub(crate) fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[inline]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[inline]
    pub fn id(&self) -> RecordId {
        self.record.id()
    }

    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Cached height of this subtree.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }

    // ========================================================================
    // Structural updates (crate-internal)
    // ========================================================================

    pub(crate) fn left_mut(&mut self) -> &mut Link {
        &mut self.left
    }

    pub(crate) fn right_mut(&mut self) -> &mut Link {
        &mut self.right
    }

    /// Recompute the cached height from the children.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Restore balance at this node after `key` was inserted below it.
    ///
    /// Refreshes the height first, then applies at most one of the four
    /// cases. The case is chosen by comparing `key` with the id of the
    /// taller child. Returns the new subtree root and the case applied.
    pub(crate) fn rebalance(mut self: Box<Self>, key: RecordId) -> (Box<Node>, Option<Rotation>) {
        self.update_height();
        let balance = self.balance_factor();

        if balance > 1 {
            let left_id = match self.left.as_deref() {
                Some(left) => left.id(),
                None => return (self, None),
            };
            debug_assert_ne!(key, left_id, "rebalancing key already in the taller child");
            match key.cmp(&left_id) {
                Ordering::Less => (rotate_right(self), Some(Rotation::LeftLeft)),
                Ordering::Greater => {
                    self.left = self.left.take().map(rotate_left);
                    (rotate_right(self), Some(Rotation::LeftRight))
                }
                Ordering::Equal => (self, None),
            }
        } else if balance < -1 {
            let right_id = match self.right.as_deref() {
                Some(right) => right.id(),
                None => return (self, None),
            };
            debug_assert_ne!(key, right_id, "rebalancing key already in the taller child");
            match key.cmp(&right_id) {
                Ordering::Greater => (rotate_left(self), Some(Rotation::RightRight)),
                Ordering::Less => {
                    self.right = self.right.take().map(rotate_right);
                    (rotate_left(self), Some(Rotation::RightLeft))
                }
                Ordering::Equal => (self, None),
            }
        } else {
            (self, None)
        }
    }
}

/// Height of a possibly empty subtree (0 when empty).
#[inline]
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Rotate `y` right around its left child.
///
/// ```text
///        y              x
///       / \            / \
///      x   C   ==>    A   y
///     / \                / \
///    A   T              T   C
/// ```
///
/// Heights are refreshed bottom-up: `y` first (now the child), then `x`.
/// Without a left child there is nothing to rotate and `y` comes back as is.
pub(crate) fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Rotate `x` left around its right child. Mirror of [`rotate_right`].
pub(crate) fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: i32) -> Box<Node> {
        Box::new(Node::new(Record::new(id, format!("e{}", id), "staff")))
    }

    fn join(mut parent: Box<Node>, left: Link, right: Link) -> Box<Node> {
        parent.left = left;
        parent.right = right;
        parent.update_height();
        parent
    }

    fn ids_in_order(node: &Node, out: &mut Vec<i32>) {
        if let Some(left) = node.left() {
            ids_in_order(left, out);
        }
        out.push(node.id().0);
        if let Some(right) = node.right() {
            ids_in_order(right, out);
        }
    }

    #[test]
    fn test_leaf_height_and_balance() {
        let node = leaf(1);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert_eq!(height(&None), 0);
    }

    #[test]
    fn test_rotate_right_moves_inner_subtree() {
        // y=40 with left x=20 (children 10, 30), right 50
        let x = join(leaf(20), Some(leaf(10)), Some(leaf(30)));
        let y = join(leaf(40), Some(x), Some(leaf(50)));
        assert_eq!(y.height(), 3);

        let root = rotate_right(y);
        assert_eq!(root.id(), RecordId::new(20));
        assert_eq!(root.left().unwrap().id(), RecordId::new(10));

        let new_right = root.right().unwrap();
        assert_eq!(new_right.id(), RecordId::new(40));
        // T (30) became y's left child
        assert_eq!(new_right.left().unwrap().id(), RecordId::new(30));
        assert_eq!(new_right.height(), 2);
        assert_eq!(root.height(), 3);

        let mut ids = Vec::new();
        ids_in_order(&root, &mut ids);
        assert_eq!(ids, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_rotate_left_is_mirror() {
        let y = join(leaf(40), Some(leaf(30)), Some(leaf(50)));
        let x = join(leaf(20), Some(leaf(10)), Some(y));

        let root = rotate_left(x);
        assert_eq!(root.id(), RecordId::new(40));
        let new_left = root.left().unwrap();
        assert_eq!(new_left.id(), RecordId::new(20));
        assert_eq!(new_left.right().unwrap().id(), RecordId::new(30));

        let mut ids = Vec::new();
        ids_in_order(&root, &mut ids);
        assert_eq!(ids, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let root = rotate_right(leaf(5));
        assert_eq!(root.id(), RecordId::new(5));
        let root = rotate_left(root);
        assert_eq!(root.id(), RecordId::new(5));
        assert_eq!(root.height(), 1);
    }

    #[test]
    fn test_rebalance_left_right_case() {
        // 30 -> left 10 -> right 20, as if 20 was just inserted
        let ten = join(leaf(10), None, Some(leaf(20)));
        let mut top = leaf(30);
        top.left = Some(ten);

        let (root, rotation) = top.rebalance(RecordId::new(20));
        assert_eq!(rotation, Some(Rotation::LeftRight));
        assert!(rotation.unwrap().is_double());
        assert_eq!(root.id(), RecordId::new(20));
        assert_eq!(root.left().unwrap().id(), RecordId::new(10));
        assert_eq!(root.right().unwrap().id(), RecordId::new(30));
        assert_eq!(root.height(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rebalancing key already in the taller child")]
    fn test_rebalance_rejects_key_equal_to_taller_child() {
        // 30 -> 20 -> 10 is left-heavy; a fix-up keyed on 20 picks no case.
        let twenty = join(leaf(20), Some(leaf(10)), None);
        let mut top = leaf(30);
        top.left = Some(twenty);

        let _ = top.rebalance(RecordId::new(20));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rebalancing key already in the taller child")]
    fn test_rebalance_rejects_key_equal_to_taller_right_child() {
        let twenty = join(leaf(20), None, Some(leaf(30)));
        let mut top = leaf(10);
        top.right = Some(twenty);

        let _ = top.rebalance(RecordId::new(20));
    }

    #[test]
    fn test_rebalance_balanced_node_untouched() {
        let node = join(leaf(2), Some(leaf(1)), None);
        let (root, rotation) = node.rebalance(RecordId::new(1));
        assert_eq!(rotation, None);
        assert_eq!(root.id(), RecordId::new(2));
        assert_eq!(root.height(), 2);
    }
}
