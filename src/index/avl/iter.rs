//! In-order traversal.

use std::iter::FusedIterator;

use crate::index::avl::node::Node;
use crate::index::Record;

/// Lazy ascending-id iterator over an [`OrderedIndex`](crate::OrderedIndex).
///
/// Keeps the path of not-yet-visited ancestors on an explicit stack, so
/// memory is O(height) and no recursion is involved. Each call to
/// [`OrderedIndex::iter`](crate::OrderedIndex::iter) starts a fresh walk.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
