use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{compare, negate};
use crate::collections::traits::{RandomAccess, Sequence};
use crate::util::error::SequenceError;
use crate::util::result::ResultExtension;

/// A read-only, bidirectional, bounds-checked cursor over a [`Sequence`]. See
/// [`Sequence::cbegin`] and [`Sequence::cend`] to create one, or [`CursorMut`](super::CursorMut)
/// for write access.
///
/// A Cursor borrows its collection, so the collection can't be mutated while the Cursor lives. To
/// edit the collection at the Cursor, take its [`position`](Cursor::position) and pass that to the
/// collection.
///
/// Stepping beyond either end of the collection or reading at the end position fails with
/// [`OutOfRange`](crate::util::error::OutOfRange). The arithmetic operators (`+`, `-`, `+=`, `-=`)
/// panic where their `try_` counterparts would return an error. Over a
/// [`RandomAccess`] collection, Cursors can also be subtracted and compared with `<`, `>`, `<=` and
/// `>=`.
pub struct Cursor<'a, S: Sequence + ?Sized> {
    pub(crate) seq: &'a S,
    pub(crate) pos: S::Position,
}

impl<'a, S: Sequence + ?Sized> Cursor<'a, S> {
    pub(crate) const fn new(seq: &'a S, pos: S::Position) -> Cursor<'a, S> {
        Cursor { seq, pos }
    }

    /// Creates a Cursor for `seq` at `pos`, after checking that `pos` is valid for `seq`.
    pub fn at(seq: &'a S, pos: S::Position) -> Result<Cursor<'a, S>, SequenceError> {
        seq.check_position(pos)?;
        Ok(Cursor::new(seq, pos))
    }

    /// Returns the position this Cursor points to.
    pub const fn position(&self) -> S::Position {
        self.pos
    }

    /// Returns the collection this Cursor traverses.
    pub const fn sequence(&self) -> &'a S {
        self.seq
    }

    /// Returns true if the Cursor is at the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        self.pos == self.seq.end_position()
    }

    /// Returns a reference to the element under the Cursor.
    pub fn try_get(&self) -> Result<&'a S::Item, SequenceError> {
        self.seq.try_get_at(self.pos)
    }

    /// Returns a reference to the element under the Cursor.
    ///
    /// # Panics
    /// Panics if the Cursor is at the end position.
    #[track_caller]
    pub fn get(&self) -> &'a S::Item {
        self.try_get().throw()
    }
}

impl_movement!(Cursor);

impl<'a, S: RandomAccess + ?Sized> Cursor<'a, S> {
    /// Returns the index of the Cursor, counted from the first position.
    pub fn try_index(&self) -> Result<isize, SequenceError> {
        self.seq.try_distance(self.seq.begin_position(), self.pos)
    }

    /// Returns the signed number of steps from `other` to this Cursor.
    pub fn try_distance_from(&self, other: &Cursor<'_, S>) -> Result<isize, SequenceError> {
        self.seq.try_distance(other.pos, self.pos)
    }
}

impl<'a, 'b, S: RandomAccess + ?Sized> Sub<Cursor<'b, S>> for Cursor<'a, S> {
    type Output = isize;

    #[track_caller]
    fn sub(self, rhs: Cursor<'b, S>) -> Self::Output {
        self.try_distance_from(&rhs).throw()
    }
}

impl<'a, S: Sequence + ?Sized> Clone for Cursor<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: Sequence + ?Sized> Copy for Cursor<'a, S> {}

impl<'a, 'b, S: Sequence + ?Sized> PartialEq<Cursor<'b, S>> for Cursor<'a, S> {
    fn eq(&self, other: &Cursor<'b, S>) -> bool {
        self.pos == other.pos
    }
}

impl<'a, S: Sequence + ?Sized> Eq for Cursor<'a, S> {}

impl<'a, 'b, S: RandomAccess + ?Sized> PartialOrd<Cursor<'b, S>> for Cursor<'a, S> {
    /// Orders Cursors by where they point. Cursors over different collections, or holding stale
    /// positions, are unordered.
    fn partial_cmp(&self, other: &Cursor<'b, S>) -> Option<Ordering> {
        compare(self.seq, self.pos, other.pos)
    }
}

impl<'a, S: Sequence + ?Sized> Debug for Cursor<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .finish()
    }
}
