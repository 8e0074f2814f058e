//! This crate is a set of textbook exercises, written out properly: a growable array list, a
//! binary search tree and a collection of queries over account records.
//!
//! # Purpose
//! Each of these is a standard first-year exercise, with no expectation for it to be used in
//! production. Writing them helps me to understand the algorithms themselves (amortized growth,
//! tree descent, in-order traversal and group-by style aggregation) as well as how they should
//! look in Rust, rather than as a template with the body left blank.
//!
//! # Method
//! The components are independent of each other, except that the tree and the queries use
//! [`ArrayList`](collections::contiguous::ArrayList) wherever they need a list. Nothing here is
//! shared between threads and nothing is persisted.
//!
//! Where the classic versions of these exercises rely on `null` (as an empty slot in the array
//! list, or as the bottom of a recursive tree walk), these use an explicit length or an explicit
//! stack instead. None of the tree operations recurse, so a tree of any height can be walked
//! (and dropped) without overflowing the stack.
//!
//! # Error Handling
//! Index based operations come in two flavours: `try_*` methods, which return a [`Result`] with a
//! small, strongly typed error, and the plain methods, which panic with that error's message. It
//! is more ergonomic for most callers to panic on a bad index, the same way slice indexing does,
//! but the typed errors are there for when that isn't acceptable. Queries that can fail to find
//! something always return a [`Result`] or an [`Option`].
//!
//! # Dependencies
//! This crate depends on `derive_more` for error and arithmetic boilerplate, `tracing` for the
//! occasional trace of what a collection is doing and `chrono` for the dates on account records.
//! Each component sits behind its own feature.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "streams")]
pub mod streams;

pub(crate) mod util;
