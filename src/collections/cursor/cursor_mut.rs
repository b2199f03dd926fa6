use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{Cursor, compare, negate};
use crate::collections::traits::{RandomAccess, Sequence};
use crate::util::error::SequenceError;
use crate::util::result::ResultExtension;

/// A bidirectional, bounds-checked cursor with write access to the elements of a [`Sequence`]. See
/// [`Sequence::begin`] and [`Sequence::end`] to create one.
///
/// Everything a [`Cursor`] can do, a CursorMut can do as well, with the same failure conditions.
/// That includes comparing against either kind of cursor and, over a [`RandomAccess`] collection,
/// measuring distances and ordering. [`as_cursor`](CursorMut::as_cursor) and
/// [`into_cursor`](CursorMut::into_cursor) narrow it to a Cursor. Going the other way requires
/// mutable access to the collection: pass a Cursor's position to [`CursorMut::at`].
pub struct CursorMut<'a, S: Sequence + ?Sized> {
    pub(crate) seq: &'a mut S,
    pub(crate) pos: S::Position,
}

impl<'a, S: Sequence + ?Sized> CursorMut<'a, S> {
    pub(crate) const fn new(seq: &'a mut S, pos: S::Position) -> CursorMut<'a, S> {
        CursorMut { seq, pos }
    }

    /// Creates a CursorMut for `seq` at `pos`, after checking that `pos` is valid for `seq`.
    pub fn at(seq: &'a mut S, pos: S::Position) -> Result<CursorMut<'a, S>, SequenceError> {
        seq.check_position(pos)?;
        Ok(CursorMut::new(seq, pos))
    }

    /// Returns the position this CursorMut points to.
    pub const fn position(&self) -> S::Position {
        self.pos
    }

    /// Borrows this CursorMut as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, S> {
        Cursor::new(&*self.seq, self.pos)
    }

    /// Converts this CursorMut into a read-only [`Cursor`] at the same position.
    pub fn into_cursor(self) -> Cursor<'a, S> {
        let seq: &'a S = self.seq;
        Cursor::new(seq, self.pos)
    }

    /// Returns true if the CursorMut is at the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        self.pos == self.seq.end_position()
    }

    /// Returns a reference to the element under the CursorMut.
    pub fn try_get(&self) -> Result<&S::Item, SequenceError> {
        self.seq.try_get_at(self.pos)
    }

    /// Returns a reference to the element under the CursorMut.
    ///
    /// # Panics
    /// Panics if the CursorMut is at the end position.
    #[track_caller]
    pub fn get(&self) -> &S::Item {
        self.try_get().throw()
    }

    /// Returns a mutable reference to the element under the CursorMut.
    pub fn try_get_mut(&mut self) -> Result<&mut S::Item, SequenceError> {
        self.seq.try_get_at_mut(self.pos)
    }

    /// Returns a mutable reference to the element under the CursorMut.
    ///
    /// # Panics
    /// Panics if the CursorMut is at the end position.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut S::Item {
        self.try_get_mut().throw()
    }

    /// Replaces the element under the CursorMut with `value`, returning the old element.
    pub fn try_set(&mut self, value: S::Item) -> Result<S::Item, SequenceError> {
        Ok(mem::replace(self.try_get_mut()?, value))
    }

    /// Replaces the element under the CursorMut with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if the CursorMut is at the end position.
    #[track_caller]
    pub fn set(&mut self, value: S::Item) -> S::Item {
        self.try_set(value).throw()
    }
}

impl_movement!(CursorMut);

impl<'a, S: RandomAccess + ?Sized> CursorMut<'a, S> {
    /// Returns the index of the CursorMut, counted from the first position.
    pub fn try_index(&self) -> Result<isize, SequenceError> {
        self.seq.try_distance(self.seq.begin_position(), self.pos)
    }

    /// Returns the signed number of steps from `other` to this CursorMut.
    pub fn try_distance_from(&self, other: &Cursor<'_, S>) -> Result<isize, SequenceError> {
        self.seq.try_distance(other.pos, self.pos)
    }
}

impl<'a, 'b, S: Sequence + ?Sized> PartialEq<Cursor<'b, S>> for CursorMut<'a, S> {
    fn eq(&self, other: &Cursor<'b, S>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, 'b, S: Sequence + ?Sized> PartialEq<CursorMut<'b, S>> for CursorMut<'a, S> {
    fn eq(&self, other: &CursorMut<'b, S>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, S: Sequence + ?Sized> Eq for CursorMut<'a, S> {}

impl<'a, 'b, S: RandomAccess + ?Sized> PartialOrd<Cursor<'b, S>> for CursorMut<'a, S> {
    fn partial_cmp(&self, other: &Cursor<'b, S>) -> Option<Ordering> {
        compare(&*self.seq, self.pos, other.pos)
    }
}

impl<'a, 'b, S: RandomAccess + ?Sized> PartialOrd<CursorMut<'b, S>> for CursorMut<'a, S> {
    fn partial_cmp(&self, other: &CursorMut<'b, S>) -> Option<Ordering> {
        compare(&*self.seq, self.pos, other.pos)
    }
}

impl<'a, S: Sequence + ?Sized> Debug for CursorMut<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .finish()
    }
}
