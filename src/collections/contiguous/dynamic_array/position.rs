use crate::util::identity::OwnerId;

/// A place in a [`DynamicArray`](super::DynamicArray): an offset in `[0, len]`, stamped with the
/// array it came from and the array's generation at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayPosition {
    pub(crate) owner: OwnerId,
    pub(crate) generation: u64,
    pub(crate) offset: usize,
}

impl ArrayPosition {
    /// Returns the offset of this position from the start of its array.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}
