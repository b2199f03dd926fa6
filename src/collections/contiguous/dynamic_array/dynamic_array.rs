use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::ArrayPosition;
use crate::collections::contiguous::Buffer;
use crate::collections::traits::{RandomAccess, Sequence};
use crate::util::error::{Access, CapacityOverflow, ForeignPosition, SequenceError, StalePosition};
use crate::util::identity::OwnerId;
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, growing by doubling its capacity.
///
/// DynamicArray implements [`Sequence`], so it is addressed through [`ArrayPosition`]s and the
/// cursors handed out by [`cbegin`](Sequence::cbegin) and friends. It also dereferences to a
/// slice, for indexing and borrowed iteration.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
/// - `k`: The number of items removed by a range erase.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get_at` | `O(1)` |
/// | `append` | `O(1)`*, `O(n)` |
/// | `prepend` | `O(n)` |
/// | `insert` | `O(n-i)`*, `O(n)` |
/// | `pop_first` | `O(n)` |
/// | `pop_last` | `O(1)` |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `try_offset_position` | `O(1)` |
///
/// \* If the DynamicArray is full, the capacity is doubled first, which takes `O(n)`. Across a
/// sequence of appends this amortizes to `O(1)` each.
///
/// # Invalidation
/// Every operation that changes the length, along with [`clear`](DynamicArray::clear) and
/// [`clone_from`](Clone::clone_from), invalidates every [`ArrayPosition`] previously obtained from
/// this DynamicArray, because the elements they name have either moved or may have moved to a new
/// allocation. Using one afterwards fails with [`StalePosition`]. [`insert`](Sequence::insert)
/// returns a fresh position for the inserted element.
pub struct DynamicArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
    pub(crate) owner: OwnerId,
    pub(crate) generation: u64,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with a small initial capacity.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 4);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(INITIAL_CAP)
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            buf: Buffer::with_cap(cap),
            len: 0,
            owner: OwnerId::fresh(),
            generation: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynamicArray can hold before it has to reallocate.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len;
        self.remove_span(0, len);
        self.invalidate();
    }

    pub(crate) const fn position(&self, offset: usize) -> ArrayPosition {
        ArrayPosition {
            owner: self.owner,
            generation: self.generation,
            offset,
        }
    }

    /// Resolves `pos` to an offset in `[0, len]`, rejecting positions from other DynamicArrays or
    /// from before the last invalidation.
    pub(crate) fn offset_of(&self, pos: ArrayPosition) -> Result<usize, SequenceError> {
        if pos.owner != self.owner {
            return Err(ForeignPosition.into());
        }
        if pos.generation != self.generation {
            return Err(StalePosition {
                position: pos.generation,
                current: self.generation,
            }.into());
        }
        Ok(pos.offset)
    }

    pub(crate) const fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Doubles the capacity of the DynamicArray. The elements are moved to the new allocation in
    /// order and the old one is released.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            INITIAL_CAP,
        );

        self.buf.realloc(new_cap);
        self.invalidate();
    }

    pub(crate) fn push(&mut self, value: T) {
        let len = self.len;
        self.insert_at(len, value);
    }

    /// Writes `value` at `index`, first moving the elements at `[index, len)` one slot right.
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the slot and the len - index slots that follow it
        // are within the allocation. ptr::copy permits the source and destination to overlap.
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }

        self.len += 1;
    }

    /// Moves the element at `index` out, then moves the elements after it one slot left.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);

        // SAFETY: index < len, so the slot is initialized. After the read, it is treated as
        // uninitialized and immediately overwritten by the following elements (if any).
        let value = unsafe {
            let slot = self.buf.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };

        self.len -= 1;
        value
    }

    /// Drops the elements at `[start, end)`, then moves the elements after them left to close the
    /// gap.
    pub(crate) fn remove_span(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);

        let tail = self.len - end;
        // If a destructor panics, the tail is leaked rather than dropped twice.
        self.len = start;

        // SAFETY: [start, end) are initialized and dropped exactly once, as len no longer covers
        // them. The tail is then moved down over the dropped slots, which may overlap.
        unsafe {
            let base = self.buf.as_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), tail);
        }

        self.len = start + tail;
    }
}

impl<T> Sequence for DynamicArray<T> {
    type Item = T;

    type Position = ArrayPosition;

    fn len(&self) -> usize {
        self.len
    }

    fn begin_position(&self) -> ArrayPosition {
        self.position(0)
    }

    fn end_position(&self) -> ArrayPosition {
        self.position(self.len)
    }

    fn check_position(&self, pos: ArrayPosition) -> Result<(), SequenceError> {
        self.offset_of(pos).map(|_| ())
    }

    fn try_position_after(&self, pos: ArrayPosition) -> Result<ArrayPosition, SequenceError> {
        let offset = self.offset_of(pos)?;
        if offset >= self.len {
            return Err(Access::StepForward.into());
        }
        Ok(self.position(offset + 1))
    }

    fn try_position_before(&self, pos: ArrayPosition) -> Result<ArrayPosition, SequenceError> {
        let offset = self.offset_of(pos)?;
        if offset == 0 {
            return Err(Access::StepBack.into());
        }
        Ok(self.position(offset - 1))
    }

    fn try_offset_position(
        &self,
        pos: ArrayPosition,
        distance: isize,
    ) -> Result<ArrayPosition, SequenceError> {
        let offset = self.offset_of(pos)?;
        match offset.checked_add_signed(distance) {
            Some(target) if target <= self.len => Ok(self.position(target)),
            _ if distance < 0 => Err(Access::StepBack.into()),
            _ => Err(Access::StepForward.into()),
        }
    }

    fn try_get_at(&self, pos: ArrayPosition) -> Result<&T, SequenceError> {
        let offset = self.offset_of(pos)?;
        match self.deref().get(offset) {
            Some(value) => Ok(value),
            None => Err(Access::Dereference.into()),
        }
    }

    fn try_get_at_mut(&mut self, pos: ArrayPosition) -> Result<&mut T, SequenceError> {
        let offset = self.offset_of(pos)?;
        match self.deref_mut().get_mut(offset) {
            Some(value) => Ok(value),
            None => Err(Access::Dereference.into()),
        }
    }

    fn try_insert(&mut self, pos: ArrayPosition, value: T) -> Result<ArrayPosition, SequenceError> {
        let offset = self.offset_of(pos)?;
        self.insert_at(offset, value);
        self.invalidate();
        Ok(self.position(offset))
    }

    fn try_erase(&mut self, pos: ArrayPosition) -> Result<T, SequenceError> {
        let offset = self.offset_of(pos)?;
        if offset == self.len {
            return Err(Access::Erase.into());
        }
        let value = self.remove_at(offset);
        self.invalidate();
        Ok(value)
    }

    fn try_erase_range(
        &mut self,
        first: ArrayPosition,
        last: ArrayPosition,
    ) -> Result<usize, SequenceError> {
        let start = self.offset_of(first)?;
        let end = self.offset_of(last)?;
        if start > end {
            return Err(Access::EraseRange.into());
        }
        if start == end {
            return Ok(0);
        }
        self.remove_span(start, end);
        self.invalidate();
        Ok(end - start)
    }
}

impl<T> RandomAccess for DynamicArray<T> {
    fn try_distance(&self, from: ArrayPosition, to: ArrayPosition) -> Result<isize, SequenceError> {
        let from = self.offset_of(from)?;
        let to = self.offset_of(to)?;
        // Offsets never exceed isize::MAX elements, the limit of a single allocation.
        Ok(to as isize - from as isize)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
        self.invalidate();
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The Buffer then
        // releases the memory without touching its contents.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: DynamicArray is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the
        // allocation, whose size is <= isize::MAX.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker guarantees that self isn't otherwise
        // accessed while the slice lives.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynamicArray::with_cap(self.cap());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();

        if self.cap() < source.len {
            self.buf.realloc(source.cap());
        }

        for value in source.iter() {
            self.push(value.clone());
        }

        self.invalidate();
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
