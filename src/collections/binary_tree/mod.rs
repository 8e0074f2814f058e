//! Binary tree collection types. Currently just [`BinarySearchTree`], an unbalanced ordered set.

pub mod set;

#[doc(inline)]
pub use set::BinarySearchTree;
