//! Aggregation queries over a fixed, in-memory collection of [`Account`] records.
//!
//! # Purpose
//! Where the collections in this crate are about building data structures, these are about using
//! them: every query is a single iterator pipeline (filter, group, fold or partition) over a
//! borrowed slice of accounts. No query mutates or clones an account, so results borrow from the
//! slice wherever they can.
//!
//! Lists are returned as [`ArrayList`](crate::collections::contiguous::ArrayList)s, in the order
//! the accounts were provided unless stated otherwise.

mod account;
mod balance;
mod error;
mod queries;
pub mod sample;
mod tests;

pub use account::*;
pub use balance::*;
pub use error::*;
pub use queries::*;
