use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when popping from a collection with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "You cannot pop from an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// The kind of access that was attempted with a position that can't support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Access {
    /// Reading or writing the element at a position.
    Dereference,
    /// Moving a position towards the end of the collection.
    StepForward,
    /// Moving a position towards the start of the collection.
    StepBack,
    /// Removing the element at a position.
    Erase,
    /// Removing the elements between two positions.
    EraseRange,
}

/// Returned when a position is valid for the collection but not for the requested operation, e.g.
/// dereferencing `end()` or stepping before `begin()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub action: Access,
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.action {
            Access::Dereference => {
                write!(f, "Cannot dereference a position outside of the collection!")
            },
            Access::StepForward => {
                write!(f, "Cannot step a position past the end of the collection!")
            },
            Access::StepBack => {
                write!(f, "Cannot step a position before the start of the collection!")
            },
            Access::Erase => write!(f, "Cannot erase the end position of a collection!"),
            Access::EraseRange => write!(f, "Cannot erase an inverted or disjoint range!"),
        }
    }
}

impl Error for OutOfRange {}

/// Returned when a position was invalidated by a mutation of its collection after it was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalePosition {
    /// The generation (or node stamp) recorded in the position.
    pub position: u64,
    /// The generation (or node stamp) currently held by the collection.
    pub current: u64,
}

impl Display for StalePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position from generation {} used on a collection at generation {}!",
            self.position, self.current
        )
    }
}

impl Error for StalePosition {}

/// Returned when a position produced by one collection is handed to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignPosition;

impl Display for ForeignPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position belongs to a different collection!")
    }
}

impl Error for ForeignPosition {}

/// Every way an operation on a [`Sequence`](crate::collections::traits::Sequence) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    EmptyCollection(EmptyCollection),
    OutOfRange(OutOfRange),
    StalePosition(StalePosition),
    ForeignPosition(ForeignPosition),
}

impl From<Access> for SequenceError {
    fn from(action: Access) -> Self {
        SequenceError::OutOfRange(OutOfRange { action })
    }
}

#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}
