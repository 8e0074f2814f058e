use std::iter::FusedIterator;
use std::mem;

use super::{BinarySearchTree, Branch, Node, Walk};
use crate::collections::contiguous::ArrayList;

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave an empty tree behind for BinarySearchTree::drop.
        IntoIter::new(mem::take(&mut self.root), self.len)
    }
}

/// An owned iterator over the values of a [`BinarySearchTree`], in ascending order.
pub struct IntoIter<T> {
    // Every node on the stack has already had its left branch taken.
    pub(crate) stack: ArrayList<Box<Node<T>>>,
    pub(crate) next: Branch<T>,
    pub(crate) len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Branch<T>, len: usize) -> IntoIter<T> {
        IntoIter {
            stack: ArrayList::new(),
            next: root,
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.next.0.take() {
            self.next = mem::take(&mut node.left);
            self.stack.push(node);
        }

        let node = *self.stack.pop()?;
        self.next = node.right;
        self.len -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Detach every node from its children before dropping it, so that no drop recurses.
        self.for_each(drop);
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            walk: self.walk(),
            len: self.len,
        }
    }
}

/// A borrowed iterator over the values of a [`BinarySearchTree`], in ascending order.
pub struct Iter<'a, T> {
    pub(crate) walk: Walk<'a, T>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, node) = self.walk.next()?;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
