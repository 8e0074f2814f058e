use super::{Branch, Node};
use crate::collections::contiguous::ArrayList;

/// An in-order walk over the nodes of a tree, yielding each node along with its depth (the number
/// of edges between it and the root).
///
/// Pending nodes are kept on an explicit stack rather than the call stack, so the height of the
/// tree is only limited by memory.
pub(crate) struct Walk<'a, T> {
    pub stack: ArrayList<(&'a Node<T>, usize)>,
    pub next: Option<(&'a Node<T>, usize)>,
}

impl<'a, T> Walk<'a, T> {
    pub fn new(root: &'a Branch<T>) -> Walk<'a, T> {
        Walk {
            stack: ArrayList::new(),
            next: root.node().map(|node| (node, 0)),
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (usize, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        // Descend to the leftmost node, remembering every node passed on the way.
        while let Some((node, depth)) = self.next {
            self.stack.push((node, depth));
            self.next = node.left.node().map(|left| (left, depth + 1));
        }

        let (node, depth) = self.stack.pop()?;
        self.next = node.right.node().map(|right| (right, depth + 1));
        Some((depth, node))
    }
}
