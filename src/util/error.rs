use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was used that doesn't refer to an element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The capacity required by an operation can't be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A collection was requested with a capacity of 0, which can never hold an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to create a collection with capacity 0!")]
pub struct ZeroCapacity;

/// An element was requested from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unable to access an element of an empty collection!")]
pub struct NoSuchElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}
