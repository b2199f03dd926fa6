use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::DynamicArray;
use crate::collections::contiguous::Buffer;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let arr = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: arr is never dropped, so the Buffer is moved out exactly once. Ownership of
            // the len initialized values passes to the iterator along with it.
            buf: unsafe { ptr::read(&arr.buf) },
            front: 0,
            back: arr.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See [`DynamicArray::into_iter`].
pub struct IntoIter<T> {
    // Slots in [front, back) are initialized and owned by the iterator.
    buf: Buffer<T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back, so the slot is initialized, and incrementing front gives up
        // ownership of it.
        let value = unsafe { self.buf.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: back was > front, so the slot is initialized, and decrementing back gave up
        // ownership of it.
        Some(unsafe { self.buf.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The values that haven't been yielded are still initialized and owned here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(self.front),
                self.back - self.front,
            ));
        }
    }
}
