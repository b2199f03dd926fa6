use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, fixed-capacity allocation of possibly-uninitialized `T`s. The Buffer never reads,
/// writes or drops its contents; tracking which slots are initialized is left to the owner.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a Buffer with room for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        let layout = Buffer::<T>::make_layout(cap);

        Buffer {
            ptr: Buffer::<T>::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the first slot.
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Moves the allocation to one with room for `new_cap` values. The first `min(cap, new_cap)`
    /// slots keep their contents, in order; the old allocation is released. Any pointer previously
    /// obtained from [`as_ptr`](Buffer::as_ptr) is invalidated.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        let old_layout = Buffer::<T>::make_layout(self.cap);
        let new_layout = Buffer::<T>::make_layout(new_cap);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and empty buffers never own an allocation, so there is nothing to
            // move or release.
            (0, 0) => NonNull::dangling(),
            (0, _) => Buffer::<T>::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new_size) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // size is > 0 and <= isize::MAX, as checked by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates a [`Layout`] for `cap` contiguous values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Allocates memory for the provided [`Layout`]. Returns a dangling pointer for a zero-sized
    /// layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Buffer::<T>::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: A Buffer has no interior mutability.
unsafe impl<T: Sync> Sync for Buffer<T> {}
