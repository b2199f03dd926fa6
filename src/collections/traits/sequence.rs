use std::fmt::Debug;
use std::hash::Hash;

use crate::collections::cursor::{Cursor, CursorMut};
use crate::util::error::{EmptyCollection, SequenceError};
use crate::util::result::ResultExtension;

/// The shared contract of the linear collections in this crate: a sequence of values that can be
/// addressed, traversed and edited through positions.
///
/// A [`Position`](Sequence::Position) names a place in exactly one collection instance, either an
/// element or the one-past-the-end place returned by [`end_position`](Sequence::end_position).
/// Positions are plain values that don't borrow the collection, so they can be held while the
/// collection is mutated and handed back to [`insert`](Sequence::insert),
/// [`erase`](Sequence::erase) and friends. For borrowing, bounds-checked traversal see [`Cursor`]
/// and [`CursorMut`].
///
/// # Invalidation
/// Every position is checked on use. A position from another collection instance fails with
/// [`ForeignPosition`](crate::util::error::ForeignPosition) and a position invalidated by an
/// intervening mutation fails with [`StalePosition`](crate::util::error::StalePosition). Which
/// mutations invalidate which positions is part of each implementor's documentation.
///
/// # Errors
/// All `try_` methods return a [`SequenceError`]. The methods without the prefix panic with the
/// error's message instead.
pub trait Sequence {
    type Item;

    type Position: Copy + Eq + Hash + Debug;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of the first element, which equals
    /// [`end_position`](Sequence::end_position) when the collection is empty.
    fn begin_position(&self) -> Self::Position;

    /// Returns the one-past-the-end position. It may be used for insertion and as the exclusive
    /// end of a range, but never dereferenced or erased.
    fn end_position(&self) -> Self::Position;

    /// Succeeds if `pos` was produced by this collection and hasn't been invalidated since.
    fn check_position(&self, pos: Self::Position) -> Result<(), SequenceError>;

    /// Returns the position following `pos`, failing if `pos` is the end.
    fn try_position_after(&self, pos: Self::Position) -> Result<Self::Position, SequenceError>;

    /// Returns the position preceding `pos`, failing if `pos` is the beginning.
    fn try_position_before(&self, pos: Self::Position) -> Result<Self::Position, SequenceError>;

    /// Returns the position `distance` steps away from `pos`, failing if any step would leave the
    /// collection. The default implementation takes one step at a time.
    fn try_offset_position(
        &self,
        mut pos: Self::Position,
        distance: isize,
    ) -> Result<Self::Position, SequenceError> {
        if distance >= 0 {
            for _ in 0..distance {
                pos = self.try_position_after(pos)?;
            }
        } else {
            for _ in 0..distance.unsigned_abs() {
                pos = self.try_position_before(pos)?;
            }
        }
        Ok(pos)
    }

    /// Returns a reference to the element at `pos`.
    fn try_get_at(&self, pos: Self::Position) -> Result<&Self::Item, SequenceError>;

    /// Returns a mutable reference to the element at `pos`.
    fn try_get_at_mut(&mut self, pos: Self::Position) -> Result<&mut Self::Item, SequenceError>;

    /// Inserts `value` immediately before `pos`, returning the position of the new element.
    fn try_insert(
        &mut self,
        pos: Self::Position,
        value: Self::Item,
    ) -> Result<Self::Position, SequenceError>;

    /// Removes and returns the element at `pos`.
    fn try_erase(&mut self, pos: Self::Position) -> Result<Self::Item, SequenceError>;

    /// Removes every element from `first` (inclusive) to `last` (exclusive), returning the number
    /// of elements removed. `last` has to be reachable from `first` by stepping forward.
    fn try_erase_range(
        &mut self,
        first: Self::Position,
        last: Self::Position,
    ) -> Result<usize, SequenceError>;

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is invalid or equal to the end position.
    #[track_caller]
    fn get_at(&self, pos: Self::Position) -> &Self::Item {
        self.try_get_at(pos).throw()
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is invalid or equal to the end position.
    #[track_caller]
    fn get_at_mut(&mut self, pos: Self::Position) -> &mut Self::Item {
        self.try_get_at_mut(pos).throw()
    }

    /// Inserts `value` immediately before `pos`, returning the position of the new element.
    ///
    /// # Panics
    /// Panics if `pos` is invalid for this collection.
    #[track_caller]
    fn insert(&mut self, pos: Self::Position, value: Self::Item) -> Self::Position {
        self.try_insert(pos, value).throw()
    }

    /// Removes and returns the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is invalid or equal to the end position.
    #[track_caller]
    fn erase(&mut self, pos: Self::Position) -> Self::Item {
        self.try_erase(pos).throw()
    }

    /// Removes the elements in `[first, last)`, returning how many were removed.
    ///
    /// # Panics
    /// Panics if either position is invalid or the range is inverted.
    #[track_caller]
    fn erase_range(&mut self, first: Self::Position, last: Self::Position) -> usize {
        self.try_erase_range(first, last).throw()
    }

    /// Adds `value` to the end of the collection.
    fn append(&mut self, value: Self::Item) {
        let end = self.end_position();
        self.insert(end, value);
    }

    /// Adds `value` to the start of the collection.
    fn prepend(&mut self, value: Self::Item) {
        let begin = self.begin_position();
        self.insert(begin, value);
    }

    /// Removes and returns the first element.
    fn try_pop_first(&mut self) -> Result<Self::Item, SequenceError> {
        if self.is_empty() {
            return Err(EmptyCollection.into());
        }
        let first = self.begin_position();
        self.try_erase(first)
    }

    /// Removes and returns the last element.
    fn try_pop_last(&mut self) -> Result<Self::Item, SequenceError> {
        if self.is_empty() {
            return Err(EmptyCollection.into());
        }
        let last = self.try_position_before(self.end_position())?;
        self.try_erase(last)
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    /// Panics if the collection is empty.
    #[track_caller]
    fn pop_first(&mut self) -> Self::Item {
        self.try_pop_first().throw()
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    /// Panics if the collection is empty.
    #[track_caller]
    fn pop_last(&mut self) -> Self::Item {
        self.try_pop_last().throw()
    }

    /// Returns a read-only cursor at the first element.
    fn cbegin(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.begin_position())
    }

    /// Returns a read-only cursor at the end position.
    fn cend(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.end_position())
    }

    /// Returns a mutable cursor at the first element.
    fn begin(&mut self) -> CursorMut<'_, Self> {
        let pos = self.begin_position();
        CursorMut::new(self, pos)
    }

    /// Returns a mutable cursor at the end position.
    fn end(&mut self) -> CursorMut<'_, Self> {
        let pos = self.end_position();
        CursorMut::new(self, pos)
    }
}

/// A [`Sequence`] whose positions can be compared by index in constant time.
pub trait RandomAccess: Sequence {
    /// Returns the signed number of steps from `from` to `to`.
    fn try_distance(
        &self,
        from: Self::Position,
        to: Self::Position,
    ) -> Result<isize, SequenceError>;

    /// Returns the signed number of steps from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either position is invalid for this collection.
    #[track_caller]
    fn distance(&self, from: Self::Position, to: Self::Position) -> isize {
        self.try_distance(from, to).throw()
    }
}
