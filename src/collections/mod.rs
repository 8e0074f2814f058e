//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as uninitialized memory, ownership of linked nodes and iterators.
//!
//! # Method
//! [`ArrayList`](contiguous::ArrayList) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
