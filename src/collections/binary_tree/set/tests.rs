#![cfg(test)]

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::alloc::CountedDrop;

#[test]
fn test_in_order_traversal() {
    let tree = BinarySearchTree::from([5, 3, 8, 1, 4]);

    let mut visited = ArrayList::new();
    tree.in_order_traversal(|value| visited.push(*value));
    assert_eq!(*visited, [1, 3, 4, 5, 8], "Values should be visited in ascending order.");

    let mut tree = BinarySearchTree::new();
    // A fixed, scrambled permutation of 0..100.
    for i in 0..100 {
        tree.insert((i * 37) % 100);
    }
    assert!(
        tree.iter().copied().eq(0..100),
        "Traversal should be sorted regardless of insertion order."
    );
    assert_eq!(tree.iter().len(), 100);
}

#[test]
fn test_insert_and_contains() {
    let mut tree = BinarySearchTree::new();
    for value in [50, 20, 70, 10, 30, 60, 80] {
        assert!(tree.insert(value), "Inserting a new value should succeed.");
        assert!(tree.contains(&value), "A value should be found right after insertion.");
    }

    for absent in [0, 15, 25, 55, 65, 90] {
        assert!(!tree.contains(&absent), "Absent values shouldn't be found.");
    }

    assert_eq!(tree.len(), 7);
    assert!(!tree.insert(30), "Inserting a duplicate should fail.");
    assert_eq!(tree.len(), 7, "Inserting a duplicate shouldn't change the length.");
}

#[test]
fn test_borrowed_lookup() {
    let tree: BinarySearchTree<String> =
        ["pear", "apple", "fig"].into_iter().map(String::from).collect();

    assert!(tree.contains("fig"));
    assert!(!tree.contains("plum"));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("pear"));
}

#[test]
fn test_depth() {
    let mut tree = BinarySearchTree::new();
    assert_eq!(tree.depth(), 0, "An empty tree should have depth 0.");

    tree.insert(10);
    assert_eq!(tree.depth(), 0, "A single node should have depth 0.");

    tree.insert(5);
    tree.insert(15);
    assert_eq!(tree.depth(), 1);

    tree.extend([1, 2, 3]);
    assert_eq!(tree.depth(), 4, "Depth should follow the longest path from the root.");
}

#[test]
fn test_degenerate_tree() {
    // Inserting in sorted order produces a list-shaped tree.
    let tree: BinarySearchTree<u32> = (0..20_000).rev().collect();

    assert_eq!(tree.len(), 20_000);
    assert_eq!(tree.depth(), 19_999);
    assert!(tree.contains(&0));
    assert_eq!(
        tree.iter().map(|&value| u64::from(value)).sum::<u64>(),
        (0..20_000_u64).sum::<u64>()
    );
}

#[test]
fn test_empty() {
    let tree = BinarySearchTree::<u8>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.into_iter().next(), None);
}

#[test]
fn test_into_iter() {
    let tree = BinarySearchTree::from(["m", "c", "x", "a", "e"]);
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some("a"));
    assert_eq!(iter.next(), Some("c"));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<ArrayList<_>>(), ArrayList::from(["e", "m", "x"]));
}

#[derive(Debug)]
struct Keyed(u8, CountedDrop);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut tree = BinarySearchTree::new();
    for key in [4, 2, 6, 1, 3, 5, 7] {
        tree.insert(Keyed(key, counter.clone()));
    }

    assert!(!tree.insert(Keyed(4, counter.clone())));
    assert_eq!(counter.count(), 1, "A rejected duplicate should be dropped immediately.");

    drop(tree);
    assert_eq!(counter.count(), 8, "Every value should be dropped exactly once.");

    let tree: BinarySearchTree<_> = (0..10).map(|key| Keyed(key, counter.clone())).collect();
    let mut iter = tree.into_iter();
    iter.next();
    iter.next();
    drop(iter);
    assert_eq!(counter.count(), 18, "A partially consumed iterator should drop the rest.");
}

#[test]
fn test_formatting() {
    let tree = BinarySearchTree::from([2, 1, 3]);
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
    assert_eq!(format!("{tree:?}"), "BinarySearchTree { values: {1, 2, 3}, len: 3, depth: 1 }");
}
