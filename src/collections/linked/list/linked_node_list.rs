use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{GUARDIAN, Iter, IterMut, NodePosition, Slot};
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Sequence;
use crate::util::error::{Access, ForeignPosition, SequenceError, StalePosition};
use crate::util::identity::OwnerId;

/// A doubly-linked list, with its nodes held in an index arena.
///
/// Every node lives in a slot of an internal [`DynamicArray`] and refers to its neighbours by slot
/// index. Slot 0 holds the guardian, a value-less node that follows the last element, so the end
/// position is always a real node that can be inserted before and stepped back from. Erased slots
/// go onto a free stack and are reused by later insertions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedNodeList.
/// - `k`: The number of items removed by a range erase.
/// - `d`: The distance moved by an offset.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front`/`back` | `O(1)` |
/// | `get_at` | `O(1)` |
/// | `append`/`prepend` | `O(1)`* |
/// | `insert` | `O(1)`* |
/// | `pop_first`/`pop_last` | `O(1)` |
/// | `erase` | `O(1)` |
/// | `erase_range` | `O(k)` |
/// | `try_offset_position` | `O(d)` |
///
/// \* Amortized: when no erased slot is free, the arena itself may have to grow.
///
/// # Invalidation
/// Insertion invalidates no positions. Erasing an element invalidates only the positions of that
/// element. Using one afterwards fails with [`StalePosition`], even once its slot has been reused.
/// [`clear`](LinkedNodeList::clear) and [`clone_from`](Clone::clone_from) erase every element.
pub struct LinkedNodeList<T> {
    pub(crate) slots: DynamicArray<Slot>,
    pub(crate) values: DynamicArray<Option<T>>,
    pub(crate) free: DynamicArray<usize>,
    pub(crate) root: usize,
    pub(crate) len: usize,
    pub(crate) owner: OwnerId,
}

impl<T> LinkedNodeList<T> {
    /// Creates a new, empty LinkedNodeList.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedNodeList;
    /// # use linear_collections::collections::traits::Sequence;
    /// let mut list = LinkedNodeList::new();
    /// list.append(2);
    /// list.prepend(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn new() -> LinkedNodeList<T> {
        let mut slots = DynamicArray::new();
        slots.push(Slot::Guardian { prev: None });
        let mut values = DynamicArray::new();
        values.push(None);

        LinkedNodeList {
            slots,
            values,
            free: DynamicArray::new(),
            root: GUARDIAN,
            len: 0,
            owner: OwnerId::fresh(),
        }
    }

    /// Returns the number of elements in the LinkedNodeList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedNodeList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.values[self.root].as_ref()
    }

    /// Returns a mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let root = self.root;
        self.values[root].as_mut()
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        let last = self.slots[GUARDIAN].prev()?;
        self.values[last].as_ref()
    }

    /// Returns a mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.slots[GUARDIAN].prev()?;
        self.values[last].as_mut()
    }

    /// Returns an iterator over references to the elements, first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over mutable references to the elements, first to last.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Drops every element, keeping the arena for reuse.
    pub fn clear(&mut self) {
        // Detach the chain first, so that a panicking destructor leaves a valid, empty list.
        let mut curr = mem::replace(&mut self.root, GUARDIAN);
        self.slots[GUARDIAN].set_prev(None);
        self.len = 0;

        while let Some(next) = self.slots[curr].next() {
            drop(self.release(curr));
            curr = next;
        }
    }

    pub(crate) fn position(&self, slot: usize) -> NodePosition {
        NodePosition {
            owner: self.owner,
            slot,
            stamp: self.slots[slot].stamp(),
        }
    }

    /// Resolves `pos` to the slot it names, rejecting positions from other lists or for nodes that
    /// have been erased since.
    pub(crate) fn slot_of(&self, pos: NodePosition) -> Result<usize, SequenceError> {
        if pos.owner != self.owner {
            return Err(ForeignPosition.into());
        }
        match self.slots.get(pos.slot) {
            Some(slot) if slot.stamp() == pos.stamp => Ok(pos.slot),
            slot => Err(StalePosition {
                position: pos.stamp,
                current: slot.map_or(0, Slot::stamp),
            }.into()),
        }
    }

    /// Makes `next` follow `prev`, or become the first node if `prev` is `None`.
    fn connect(&mut self, prev: Option<usize>, next: usize) {
        match prev {
            Some(prev) => self.slots[prev].set_next(next),
            None => self.root = next,
        }
        self.slots[next].set_prev(prev);
    }

    /// Places a new, unconnected node in a free slot, growing the arena if there is none.
    fn claim(&mut self, prev: Option<usize>, next: usize, value: T) -> usize {
        match self.free.try_pop_last() {
            Ok(index) => {
                let stamp = self.slots[index].stamp();
                self.slots[index] = Slot::Linked { prev, next, stamp };
                self.values[index] = Some(value);
                index
            },
            Err(_) => {
                self.slots.push(Slot::Linked { prev, next, stamp: 0 });
                self.values.push(Some(value));
                self.slots.len() - 1
            },
        }
    }

    /// Vacates the slot at `index`, which must already be disconnected, and returns its value.
    fn release(&mut self, index: usize) -> Option<T> {
        let stamp = self.slots[index].stamp().wrapping_add(1);
        self.slots[index] = Slot::Vacant { stamp };
        self.free.push(index);
        self.values[index].take()
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.root;

        while curr != GUARDIAN {
            match self.slots[curr] {
                Slot::Linked { prev: back, next, .. } => {
                    assert_eq!(back, prev, "Node {curr} should link back to its predecessor.");
                    assert!(self.values[curr].is_some(), "Node {curr} should hold a value.");
                    prev = Some(curr);
                    curr = next;
                    count += 1;
                },
                slot => panic!("Slot {curr} is reachable but {slot:?}!"),
            }
        }

        assert_eq!(
            self.slots[GUARDIAN].prev(),
            prev,
            "Guardian should link back to the last node."
        );
        assert_eq!(count, self.len, "Every element should be reachable from the root.");

        for &index in self.free.iter() {
            assert!(
                matches!(self.slots[index], Slot::Vacant { .. }),
                "Free slot {index} should be vacant."
            );
            assert!(self.values[index].is_none(), "Free slot {index} shouldn't hold a value.");
        }
        assert_eq!(
            self.free.len() + self.len + 1,
            self.slots.len(),
            "Every slot should be either linked, free or the guardian."
        );
    }
}

impl<T> Sequence for LinkedNodeList<T> {
    type Item = T;

    type Position = NodePosition;

    fn len(&self) -> usize {
        self.len
    }

    fn begin_position(&self) -> NodePosition {
        self.position(self.root)
    }

    fn end_position(&self) -> NodePosition {
        self.position(GUARDIAN)
    }

    fn check_position(&self, pos: NodePosition) -> Result<(), SequenceError> {
        self.slot_of(pos).map(|_| ())
    }

    fn try_position_after(&self, pos: NodePosition) -> Result<NodePosition, SequenceError> {
        let index = self.slot_of(pos)?;
        match self.slots[index].next() {
            Some(next) => Ok(self.position(next)),
            None => Err(Access::StepForward.into()),
        }
    }

    fn try_position_before(&self, pos: NodePosition) -> Result<NodePosition, SequenceError> {
        let index = self.slot_of(pos)?;
        match self.slots[index].prev() {
            Some(prev) => Ok(self.position(prev)),
            None => Err(Access::StepBack.into()),
        }
    }

    fn try_get_at(&self, pos: NodePosition) -> Result<&T, SequenceError> {
        let index = self.slot_of(pos)?;
        self.values[index].as_ref().ok_or(Access::Dereference.into())
    }

    fn try_get_at_mut(&mut self, pos: NodePosition) -> Result<&mut T, SequenceError> {
        let index = self.slot_of(pos)?;
        self.values[index].as_mut().ok_or(Access::Dereference.into())
    }

    fn try_insert(&mut self, pos: NodePosition, value: T) -> Result<NodePosition, SequenceError> {
        let next = self.slot_of(pos)?;
        let prev = self.slots[next].prev();

        let index = self.claim(prev, next, value);
        self.connect(prev, index);
        self.connect(Some(index), next);
        self.len += 1;

        Ok(self.position(index))
    }

    fn try_erase(&mut self, pos: NodePosition) -> Result<T, SequenceError> {
        let index = self.slot_of(pos)?;
        let (prev, next) = match self.slots[index] {
            Slot::Linked { prev, next, .. } => (prev, next),
            _ => return Err(Access::Erase.into()),
        };

        self.connect(prev, next);
        self.len -= 1;

        self.release(index).ok_or(Access::Erase.into())
    }

    fn try_erase_range(
        &mut self,
        first: NodePosition,
        last: NodePosition,
    ) -> Result<usize, SequenceError> {
        let start = self.slot_of(first)?;
        let end = self.slot_of(last)?;

        // Walk the range before touching anything, so that a range where last doesn't follow
        // first is rejected with the list unchanged.
        let mut count = 0;
        let mut curr = start;
        while curr != end {
            curr = self.slots[curr].next().ok_or(Access::EraseRange)?;
            count += 1;
        }

        if count == 0 {
            return Ok(0);
        }

        let prev = self.slots[start].prev();
        self.connect(prev, end);

        let mut curr = start;
        while curr != end {
            let Some(next) = self.slots[curr].next() else { break };
            self.len -= 1;
            drop(self.release(curr));
            curr = next;
        }

        Ok(count)
    }
}

impl<T> Extend<T> for LinkedNodeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedNodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedNodeList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedNodeList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedNodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedNodeList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for LinkedNodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedNodeList<T> {}

impl<T: Hash> Hash for LinkedNodeList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

struct Entries<'a, T>(&'a LinkedNodeList<T>);

impl<T: Debug> Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Debug for LinkedNodeList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedNodeList")
            .field("contents", &Entries(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedNodeList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({item:?})")?;
        }
        write!(f, "]")
    }
}
