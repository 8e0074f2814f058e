//! Contiguous collection types. Namely [`ArrayList`], a growable list backed by a single boxed
//! slice.

pub mod array_list;

#[doc(inline)]
pub use array_list::ArrayList;
