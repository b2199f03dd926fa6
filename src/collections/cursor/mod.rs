//! Bidirectional cursors over any [`Sequence`](crate::collections::traits::Sequence): [`Cursor`]
//! for reading and [`CursorMut`] for reading and writing. Both share their position handling, so a
//! cursor behaves the same whichever collection it walks.

use std::cmp::Ordering;

use crate::collections::traits::RandomAccess;
use crate::util::error::{Access, SequenceError};

/// Negates `distance` for the subtracting operators. Negating [`isize::MIN`] overflows, and a move
/// that large always leaves the collection.
pub(crate) fn negate(distance: isize) -> Result<isize, SequenceError> {
    distance.checked_neg().ok_or(SequenceError::from(Access::StepForward))
}

/// Orders `pos` against `other` within `seq`. Positions `seq` rejects have no order, except that a
/// position always equals itself.
pub(crate) fn compare<S: RandomAccess + ?Sized>(
    seq: &S,
    pos: S::Position,
    other: S::Position,
) -> Option<Ordering> {
    if pos == other {
        return Some(Ordering::Equal);
    }
    seq.try_distance(other, pos).ok().map(|distance| distance.cmp(&0))
}

/// Implements stepping, seeking and the `isize` operators for a cursor type with `seq` and `pos`
/// fields.
macro_rules! impl_movement {
    ($cursor:ident) => {
        impl<'a, S: Sequence + ?Sized> $cursor<'a, S> {
            /// Moves the cursor one element towards the end.
            pub fn try_move_next(&mut self) -> Result<&mut Self, SequenceError> {
                self.pos = self.seq.try_position_after(self.pos)?;
                Ok(self)
            }

            /// Moves the cursor one element towards the end.
            ///
            /// # Panics
            /// Panics if the cursor is already at the end position.
            #[track_caller]
            pub fn move_next(&mut self) -> &mut Self {
                self.try_move_next().throw()
            }

            /// Moves the cursor one element towards the start.
            pub fn try_move_prev(&mut self) -> Result<&mut Self, SequenceError> {
                self.pos = self.seq.try_position_before(self.pos)?;
                Ok(self)
            }

            /// Moves the cursor one element towards the start.
            ///
            /// # Panics
            /// Panics if the cursor is at the first position.
            #[track_caller]
            pub fn move_prev(&mut self) -> &mut Self {
                self.try_move_prev().throw()
            }

            /// Moves the cursor one element towards the end, returning the position it held before.
            pub fn try_post_next(&mut self) -> Result<S::Position, SequenceError> {
                let old = self.pos;
                self.try_move_next()?;
                Ok(old)
            }

            /// Moves the cursor one element towards the end, returning the position it held before.
            ///
            /// # Panics
            /// Panics if the cursor is already at the end position.
            #[track_caller]
            pub fn post_next(&mut self) -> S::Position {
                self.try_post_next().throw()
            }

            /// Moves the cursor one element towards the start, returning the position it held
            /// before.
            pub fn try_post_prev(&mut self) -> Result<S::Position, SequenceError> {
                let old = self.pos;
                self.try_move_prev()?;
                Ok(old)
            }

            /// Moves the cursor one element towards the start, returning the position it held
            /// before.
            ///
            /// # Panics
            /// Panics if the cursor is at the first position.
            #[track_caller]
            pub fn post_prev(&mut self) -> S::Position {
                self.try_post_prev().throw()
            }

            /// Moves the cursor by `distance` elements, forwards if positive. On failure the cursor
            /// is left where it was.
            pub fn try_seek(&mut self, distance: isize) -> Result<&mut Self, SequenceError> {
                self.pos = self.seq.try_offset_position(self.pos, distance)?;
                Ok(self)
            }

            /// Moves the cursor by `distance` elements, forwards if positive.
            ///
            /// # Panics
            /// Panics if any step would leave the collection.
            #[track_caller]
            pub fn seek(&mut self, distance: isize) -> &mut Self {
                self.try_seek(distance).throw()
            }

            /// Returns this cursor moved `distance` elements.
            pub fn try_offset(mut self, distance: isize) -> Result<Self, SequenceError> {
                self.try_seek(distance)?;
                Ok(self)
            }

            /// Returns this cursor moved `distance` elements.
            ///
            /// # Panics
            /// Panics if any step would leave the collection.
            #[track_caller]
            pub fn offset(self, distance: isize) -> Self {
                self.try_offset(distance).throw()
            }
        }

        impl<'a, S: Sequence + ?Sized> Add<isize> for $cursor<'a, S> {
            type Output = $cursor<'a, S>;

            #[track_caller]
            fn add(self, rhs: isize) -> Self::Output {
                self.offset(rhs)
            }
        }

        impl<'a, S: Sequence + ?Sized> Sub<isize> for $cursor<'a, S> {
            type Output = $cursor<'a, S>;

            #[track_caller]
            fn sub(self, rhs: isize) -> Self::Output {
                self.offset(negate(rhs).throw())
            }
        }

        impl<'a, S: Sequence + ?Sized> AddAssign<isize> for $cursor<'a, S> {
            #[track_caller]
            fn add_assign(&mut self, rhs: isize) {
                self.seek(rhs);
            }
        }

        impl<'a, S: Sequence + ?Sized> SubAssign<isize> for $cursor<'a, S> {
            #[track_caller]
            fn sub_assign(&mut self, rhs: isize) {
                self.seek(negate(rhs).throw());
            }
        }
    };
}

mod cursor;
mod cursor_mut;

pub use cursor::*;
pub use cursor_mut::*;
