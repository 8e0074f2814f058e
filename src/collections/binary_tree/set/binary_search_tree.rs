use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use tracing::trace;

use super::{Branch, IntoIter, Iter, Node, Walk};
use crate::util::option::OptionExtension;

/// An ordered set of values, stored as an unbalanced binary search tree.
///
/// Every value in the left subtree of a node is less than the node's value, and every value in
/// its right subtree is greater. Duplicate values are rejected. There is no rebalancing, so
/// inserting values in sorted order produces a tree with the same shape as a linked list. None of
/// the operations here recurse, so such trees are handled without overflowing the stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `depth` | `O(n)` |
/// | `in_order_traversal` | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the provided value as a new leaf, returning false instead if an equal value is
    /// already in the tree. In that case, the tree is left unchanged and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut branch = &mut self.root;

        while branch.0.is_some() {
            // SAFETY: The loop condition has just checked that branch holds a node.
            let node = unsafe { branch.0.as_mut().unreachable() };
            branch = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!(len = self.len, "rejecting duplicate value");
                    return false;
                },
            };
        }

        branch.0 = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    /// Returns true if the tree contains a value equal to the one provided.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::binary_tree::BinarySearchTree;
    /// let tree = BinarySearchTree::from([String::from("b"), String::from("a")]);
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = &self.root;

        while let Some(node) = branch.node() {
            branch = match value.cmp(node.value.borrow()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Returns the smallest value in the tree, if there is one.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value in the tree, if there is one.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the number of edges on the longest path from the root to a leaf. Both an empty
    /// tree and a tree containing a single value have a depth of 0.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::binary_tree::BinarySearchTree;
    /// let tree = BinarySearchTree::from([5, 3, 8, 1, 4]);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Invokes `visit` with every value in the tree, in ascending order.
    ///
    /// # Examples
    /// ```
    /// # use textbook::collections::binary_tree::BinarySearchTree;
    /// let tree = BinarySearchTree::from([5, 3, 8, 1, 4]);
    /// let mut visited = Vec::new();
    /// tree.in_order_traversal(|value| visited.push(*value));
    /// assert_eq!(visited, [1, 3, 4, 5, 8]);
    /// ```
    pub fn in_order_traversal<F: FnMut(&T)>(&self, visit: F) {
        self.iter().for_each(visit);
    }

    /// Returns an iterator over references to every value in the tree, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn walk(&self) -> Walk<'_, T> {
        Walk::new(&self.root)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Dropping the boxes directly would recurse once per level of the tree.
        drop(IntoIter::new(mem::take(&mut self.root), self.len));
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinarySearchTree<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("values", &format_args!("{self}"))
            .field("len", &self.len)
            .field("depth", &self.depth())
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
