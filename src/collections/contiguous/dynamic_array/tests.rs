#![cfg(test)]

use std::cmp::Ordering;
use std::hash::{BuildHasher, RandomState};
use std::mem;

use super::*;
use crate::collections::cursor::{Cursor, CursorMut};
use crate::collections::traits::{RandomAccess, Sequence};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{Access, EmptyCollection, ForeignPosition, SequenceError};
use crate::util::panic::assert_panics;

fn sample() -> DynamicArray<i32> {
    DynamicArray::from([1, 2, 3, 4, 5])
}

#[test]
fn test_growth() {
    let mut arr = DynamicArray::new();
    assert_eq!(arr.cap(), 4, "A new DynamicArray should start with room for 4 elements.");

    for i in 0..4 {
        arr.append(i);
    }
    assert_eq!(arr.cap(), 4, "Filling the DynamicArray exactly shouldn't reallocate.");

    arr.append(4);
    assert_eq!(arr.cap(), 8, "Appending to a full DynamicArray should double its capacity.");

    for i in 5..9 {
        arr.append(i);
    }
    assert_eq!(arr.cap(), 16);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8], "Growing should keep every element in order.");

    let mut arr = DynamicArray::with_cap(0);
    arr.prepend(1);
    assert_eq!(arr.cap(), 4, "Growing from no capacity should use the initial capacity.");
}

#[test]
fn test_insert_at_positions() {
    let mut arr = sample();

    let begin = arr.begin_position();
    let pos = arr.insert(begin, 99);
    assert_eq!(&*arr, &[99, 1, 2, 3, 4, 5], "Inserting at begin should prepend.");
    assert_eq!(pos.offset(), 0);
    assert_eq!(*arr.get_at(pos), 99, "The returned position should name the new element.");

    let end = arr.end_position();
    let pos = arr.insert(end, 99);
    assert_eq!(&*arr, &[99, 1, 2, 3, 4, 5, 99], "Inserting at end should append.");
    assert_eq!(pos.offset(), 6);

    let third = arr.cbegin().offset(2).position();
    let pos = arr.insert(third, 99);
    assert_eq!(
        &*arr,
        &[99, 1, 99, 2, 3, 4, 5, 99],
        "Inserting in the middle should shift the tail."
    );
    assert_eq!(arr.distance(arr.begin_position(), pos), 2);
    assert_eq!(arr.len(), 8);
}

#[test]
fn test_insert_when_full() {
    let mut arr = DynamicArray::from([1, 2, 3, 4]);
    assert_eq!(arr.cap(), 4);

    let second = arr.cbegin().offset(1).position();
    arr.insert(second, 10);
    assert_eq!(&*arr, &[1, 10, 2, 3, 4], "Growing during an insert should keep the order.");
    assert_eq!(arr.cap(), 8);
}

#[test]
fn test_pop() {
    let mut arr = sample();
    assert_eq!(arr.pop_last(), 5);
    assert_eq!(arr.pop_first(), 1);
    assert_eq!(&*arr, &[2, 3, 4]);

    arr.clear();
    assert_eq!(
        arr.try_pop_first(),
        Err(SequenceError::EmptyCollection(EmptyCollection)),
        "Popping from an empty DynamicArray should fail."
    );
    assert_eq!(arr.try_pop_last(), Err(EmptyCollection.into()));
    assert_panics!({ arr.pop_last() }, message = EmptyCollection);
    assert_panics!({ arr.pop_first() }, "pop_first should panic when empty");
}

#[test]
fn test_pop_last_moves_value_out() {
    let counter = CountedDrop::new();
    let mut arr = DynamicArray::from([counter.clone(), counter.clone(), counter.clone()]);

    let popped = arr.pop_last();
    assert_eq!(counter.drops(), 0, "Popping shouldn't drop the value it returns.");
    assert_eq!(arr.len(), 2);

    drop(popped);
    assert_eq!(counter.drops(), 1);

    drop(arr);
    assert_eq!(counter.drops(), 3, "Every element should be dropped exactly once.");
}

#[test]
fn test_erase() {
    let mut arr = sample();

    let second = arr.cbegin().offset(1).position();
    assert_eq!(arr.erase(second), 2);
    assert_eq!(&*arr, &[1, 3, 4, 5]);

    let end = arr.end_position();
    assert_eq!(
        arr.try_erase(end),
        Err(Access::Erase.into()),
        "The end position can't be erased."
    );
    assert_eq!(arr.len(), 4, "A failed erase should leave the DynamicArray unchanged.");

    let last = arr.cend().offset(-1).position();
    assert_eq!(arr.erase(last), 5);
    assert_eq!(&*arr, &[1, 3, 4]);
}

#[test]
fn test_erase_range() {
    let mut arr = sample();

    let first = arr.cbegin().offset(1).position();
    let last = arr.cbegin().offset(4).position();
    assert_eq!(arr.erase_range(first, last), 3);
    assert_eq!(&*arr, &[1, 5], "Only the half-open range should be removed.");

    let begin = arr.begin_position();
    assert_eq!(arr.erase_range(begin, begin), 0, "An empty range should remove nothing.");
    assert!(
        arr.check_position(begin).is_ok(),
        "Erasing an empty range shouldn't invalidate positions."
    );

    let end = arr.end_position();
    assert_eq!(
        arr.try_erase_range(end, begin),
        Err(Access::EraseRange.into()),
        "An inverted range should be rejected."
    );
    assert_eq!(&*arr, &[1, 5]);

    assert_eq!(arr.erase_range(begin, end), 2);
    assert!(arr.is_empty());
}

#[test]
fn test_stale_positions() {
    let mut arr = sample();
    let pos = arr.begin_position();
    assert!(arr.check_position(pos).is_ok());

    arr.append(6);
    assert!(
        arr.try_get_at(pos).is_err_and(|e| e.is_stale_position()),
        "Appending should invalidate existing positions."
    );
    assert!(arr.try_insert(pos, 0).is_err_and(|e| e.is_stale_position()));
    assert_eq!(arr.len(), 6, "A failed insert should leave the DynamicArray unchanged.");
    assert_panics!({ arr.get_at(pos) }, "using a stale position should panic");

    let pos = arr.begin_position();
    arr.clear();
    assert!(arr.check_position(pos).is_err(), "Clearing should invalidate positions.");
    assert!(CursorMut::at(&mut arr, pos).is_err());
}

#[test]
fn test_foreign_positions() {
    let a = sample();
    let b = sample();
    assert_eq!(
        a.try_get_at(b.begin_position()),
        Err(ForeignPosition.into()),
        "A position from another DynamicArray should be rejected."
    );

    let c = a.clone();
    assert_eq!(
        c.check_position(a.begin_position()),
        Err(ForeignPosition.into()),
        "A clone shouldn't accept the positions of its source."
    );
}

#[test]
fn test_cursor() {
    let arr = DynamicArray::from([1, 2, 3]);

    let mut cur = arr.cbegin();
    assert_eq!(*cur.get(), 1);
    cur.move_next();
    assert_eq!(*cur.get(), 2);

    let old = cur.post_next();
    assert_eq!(*arr.get_at(old), 2, "post_next should return the position it held before.");
    assert_eq!(*cur.get(), 3);

    cur.move_next();
    assert!(cur.is_end());
    assert_eq!(cur, arr.cend());
    assert_eq!(cur.try_get().err(), Some(Access::Dereference.into()));
    assert_eq!(cur.try_move_next().err(), Some(Access::StepForward.into()));
    assert!(cur.is_end(), "A failed step should leave the cursor where it was.");

    cur.move_prev();
    assert_eq!(*cur.get(), 3);

    let mut first = arr.cbegin();
    assert_eq!(first.try_move_prev().err(), Some(Access::StepBack.into()));
    assert_panics!({ arr.cend().get() }, "dereferencing end should panic");
    assert_panics!({ arr.cbegin().move_prev(); }, "stepping before begin should panic");
}

#[test]
fn test_cursor_arithmetic() {
    let arr = sample();

    let cur = arr.cbegin() + 2;
    assert_eq!(*cur.get(), 3);
    assert_eq!(cur - arr.cbegin(), 2, "Subtracting cursors should give their distance.");
    assert_eq!(arr.cbegin() - cur, -2);
    assert_eq!(*(arr.cend() - 1isize).get(), 5);
    assert_eq!(cur.try_index(), Ok(2));

    let mut cur = arr.cbegin();
    cur += 4;
    cur -= 1isize;
    assert_eq!(*cur.get(), 4);

    assert!(arr.cbegin().try_offset(6).is_err());
    assert!(arr.cbegin().try_offset(5).is_ok_and(|c| c.is_end()));
    assert_panics!({ arr.cbegin() + 6 }, "moving past the end should panic");
    assert_panics!({ arr.cend() - isize::MIN }, "negating isize::MIN should panic");

    let cur = arr.cbegin() + 2;
    assert!(arr.cbegin() < arr.cend(), "Cursors should order by position.");
    assert!(cur >= arr.cbegin() && cur <= arr.cend());
    assert!(arr.cend() > cur);
    assert_eq!(cur.partial_cmp(&(arr.cend() - 3isize)), Some(Ordering::Equal));

    let other = sample();
    assert_eq!(
        arr.cbegin().partial_cmp(&other.cbegin()),
        None,
        "Cursors over different arrays should be unordered."
    );
    assert!(!(arr.cbegin() < other.cend()));

    let mut grown = sample();
    let stale = grown.begin_position();
    grown.append(6);
    let cur = Cursor::new(&grown, stale);
    assert_eq!(cur.partial_cmp(&grown.cend()), None, "A stale position should have no order.");
    assert_eq!(cur.partial_cmp(&cur), Some(Ordering::Equal));
}

#[test]
fn test_cursor_mut() {
    let mut arr = DynamicArray::from([1, 2, 3]);

    let mut cur = arr.begin();
    assert_eq!(cur.set(10), 1, "set should return the replaced element.");
    cur.move_next();
    *cur.get_mut() += 5;
    cur += 1;
    assert_eq!(*cur.get(), 3);
    assert_eq!(cur.try_index(), Ok(2));

    let first = cur.as_cursor().offset(-2);
    assert_eq!(cur.try_distance_from(&first), Ok(2));
    assert!(cur > first, "A CursorMut should order against a Cursor.");

    let read = cur.into_cursor();
    assert_eq!(*read.get(), 3);
    assert_eq!(&*arr, &[10, 7, 3]);

    let mut end = arr.end();
    assert!(end.try_set(0).is_err(), "The end position holds no element to replace.");
    end.move_prev();
    assert_eq!(end.set(30), 3);
    assert_eq!(&*arr, &[10, 7, 30]);

    let second = arr.cbegin().offset(1).position();
    let cur = CursorMut::at(&mut arr, second);
    assert!(cur.is_ok_and(|c| *c.get() == 7), "A valid position should widen to a CursorMut.");

    let mut other = DynamicArray::from([7]);
    assert_ne!(arr.begin(), other.begin(), "Cursors over different arrays shouldn't be equal.");
    assert_eq!(arr.begin().partial_cmp(&other.begin()), None);
}

#[test]
fn test_offset_position() {
    let arr = sample();
    let begin = arr.begin_position();

    assert_eq!(arr.try_offset_position(begin, 5), Ok(arr.end_position()));
    assert_eq!(arr.try_offset_position(begin, 6), Err(Access::StepForward.into()));
    assert_eq!(arr.try_offset_position(begin, -1), Err(Access::StepBack.into()));
    assert_eq!(arr.try_offset_position(begin, isize::MIN), Err(Access::StepBack.into()));

    assert_eq!(arr.distance(begin, arr.end_position()), 5);
    assert_eq!(arr.distance(arr.end_position(), begin), -5);
}

#[test]
fn test_clone() {
    let a = sample();
    let mut b = a.clone();
    assert_eq!(a, b);

    b.append(6);
    b[0] = 100;
    assert_eq!(&*a, &[1, 2, 3, 4, 5], "Changing a clone shouldn't affect its source.");
    assert_eq!(&*b, &[100, 2, 3, 4, 5, 6]);

    let mut c = DynamicArray::from([9; 10]);
    let pos = c.begin_position();
    c.clone_from(&a);
    assert_eq!(c, a);
    assert!(
        c.try_get_at(pos).is_err_and(|e| e.is_stale_position()),
        "clone_from should invalidate the target's positions."
    );

    let mut d = DynamicArray::new();
    d.clone_from(&b);
    assert_eq!(d, b, "clone_from should grow a smaller target.");
}

#[test]
fn test_take() {
    let mut a = sample();
    let b = mem::take(&mut a);

    assert!(a.is_empty(), "The moved-from DynamicArray should be empty.");
    assert_eq!(b.len(), 5);

    a.append(1);
    assert_eq!(&*a, &[1], "The moved-from DynamicArray should still be usable.");
}

#[test]
fn test_drops() {
    let counter = CountedDrop::new();
    let mut arr: DynamicArray<_> = (0..6).map(|_| counter.clone()).collect();

    let begin = arr.begin_position();
    drop(arr.erase(begin));
    assert_eq!(counter.drops(), 1);

    let begin = arr.begin_position();
    let third = arr.cbegin().offset(2).position();
    arr.erase_range(begin, third);
    assert_eq!(counter.drops(), 3, "Erasing a range should drop the erased elements.");

    drop(arr);
    assert_eq!(counter.drops(), 6);

    let counter = CountedDrop::new();
    let arr: DynamicArray<_> = (0..6).map(|_| counter.clone()).collect();
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(iter.len(), 4);
    drop(iter);
    assert_eq!(counter.drops(), 6, "Dropping an IntoIter should drop the remaining elements.");
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::new();
    for _ in 0..10 {
        arr.append(ZeroSizedType);
    }
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.iter().count(), 10);

    let pos = arr.cbegin().offset(3).position();
    assert_eq!(arr.erase(pos), ZeroSizedType);
    assert_eq!(arr.pop_last(), ZeroSizedType);
    assert_eq!(arr.len(), 8);
}

#[test]
fn test_iter() {
    let mut arr = sample();
    assert!(arr.iter().eq([1, 2, 3, 4, 5].iter()));
    assert!(arr.iter().rev().eq([5, 4, 3, 2, 1].iter()));

    for value in &mut arr {
        *value *= 2;
    }
    assert_eq!(&*arr, &[2, 4, 6, 8, 10]);

    let collected: DynamicArray<_> = arr.into_iter().rev().collect();
    assert_eq!(&*collected, &[10, 8, 6, 4, 2]);

    let mut arr = sample();
    let pos = arr.begin_position();
    arr.extend([6, 7]);
    assert_eq!(arr.len(), 7);
    assert!(arr.check_position(pos).is_err(), "Extending should invalidate positions.");
}

#[test]
fn test_eq_and_hash() {
    let a = sample();
    let mut b = DynamicArray::with_cap(100);
    b.extend(1..=5);

    assert_eq!(a, b, "Capacity shouldn't affect equality.");
    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal arrays should hash equally.");

    b.pop_last();
    assert_ne!(a, b);
}

#[test]
fn test_fmt() {
    assert_eq!(format!("{}", sample()), "[1, 2, 3, 4, 5]");
    assert_eq!(
        format!("{:?}", DynamicArray::from([1, 2])),
        "DynamicArray { contents: [1, 2], len: 2, cap: 2 }"
    );
}
