//! A module containing [`BinarySearchTree`] and associtated types.
//!
//! Both iterators yield values in ascending order: [`Iter`] by reference and [`IntoIter`] by value.
//!
//! [`BinarySearchTree`] is also re-exported under the parent module.

mod binary_search_tree;
mod iter;
mod node;
mod tests;
mod walk;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
pub(crate) use walk::*;
