use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{GUARDIAN, LinkedNodeList, Slot};
use crate::collections::traits::Sequence;

impl<T> IntoIterator for LinkedNodeList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the elements of a [`LinkedNodeList`].
pub struct IntoIter<T> {
    // Popping from either end is already O(1), so the iterator just holds the list.
    pub(crate) list: LinkedNodeList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.try_pop_last().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedNodeList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the elements of a [`LinkedNodeList`]. See [`LinkedNodeList::iter`].
pub struct Iter<'a, T> {
    // front is the next node to yield, back the node after the next one to yield from the back.
    // remaining counts the nodes between them.
    pub(crate) slots: &'a [Slot],
    pub(crate) values: &'a [Option<T>],
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedNodeList<T>) -> Iter<'a, T> {
        Iter {
            slots: &list.slots,
            values: &list.values,
            front: list.root,
            back: GUARDIAN,
            remaining: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front;
        self.front = self.slots[index].next()?;
        self.remaining -= 1;
        self.values[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.slots[self.back].prev()?;
        self.remaining -= 1;
        self.values[self.back].as_ref()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedNodeList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A mutable borrowed iterator over the elements of a [`LinkedNodeList`]. See
/// [`LinkedNodeList::iter_mut`].
pub struct IterMut<'a, T> {
    // Links are only ever read, so they can stay shared. Values are reached through a pointer into
    // the value arena, each slot at most once.
    pub(crate) slots: &'a [Slot],
    pub(crate) values: *mut Option<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedNodeList<T>) -> IterMut<'a, T> {
        IterMut {
            values: list.values.buf.as_ptr(),
            slots: &list.slots,
            front: list.root,
            back: GUARDIAN,
            remaining: list.len,
            _phantom: PhantomData,
        }
    }

    /// Borrows the value in slot `index` for the lifetime of the iterator.
    ///
    /// # Safety
    /// `index` has to be a linked slot of the list that hasn't been yielded before.
    unsafe fn value(&mut self, index: usize) -> Option<&'a mut T> {
        // SAFETY: Linked slots are within the value arena and initialized. The list is mutably
        // borrowed for 'a and the caller guarantees this is the only reference to the slot.
        let value: &'a mut Option<T> = unsafe { &mut *self.values.add(index) };
        value.as_mut()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front;
        self.front = self.slots[index].next()?;
        self.remaining -= 1;
        // SAFETY: remaining was non-zero, so index is a linked slot strictly before every slot
        // yielded from the back, and front has already moved past it.
        unsafe { self.value(index) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.slots[self.back].prev()?;
        self.back = index;
        self.remaining -= 1;
        // SAFETY: remaining was non-zero, so index is a linked slot strictly after every slot
        // yielded from the front, and back has already moved past it.
        unsafe { self.value(index) }
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
