/// The index of the guardian slot, which exists in every list and marks the end position.
pub(crate) const GUARDIAN: usize = 0;

/// The links of one arena slot. The value of a linked slot is stored separately, at the same
/// index, so that links can be read while values are mutably borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The value-less end node. `prev` is the last real node, if any.
    Guardian { prev: Option<usize> },
    /// A real node. A `prev` of `None` marks the first node; the last node's `next` is the
    /// guardian.
    Linked {
        prev: Option<usize>,
        next: usize,
        stamp: u64,
    },
    /// A recycled slot waiting on the free stack.
    Vacant { stamp: u64 },
}

impl Slot {
    /// Returns the stamp of the slot, which changes every time a node is erased from it. Positions
    /// record the stamp they were created with.
    pub const fn stamp(&self) -> u64 {
        match self {
            Slot::Guardian { .. } => 0,
            Slot::Linked { stamp, .. } | Slot::Vacant { stamp } => *stamp,
        }
    }

    pub const fn prev(&self) -> Option<usize> {
        match self {
            Slot::Guardian { prev } | Slot::Linked { prev, .. } => *prev,
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns the following slot, which only linked slots have.
    pub const fn next(&self) -> Option<usize> {
        match self {
            Slot::Linked { next, .. } => Some(*next),
            _ => None,
        }
    }

    pub fn set_prev(&mut self, new_prev: Option<usize>) {
        match self {
            Slot::Guardian { prev } | Slot::Linked { prev, .. } => *prev = new_prev,
            Slot::Vacant { .. } => {},
        }
    }

    pub fn set_next(&mut self, new_next: usize) {
        if let Slot::Linked { next, .. } = self {
            *next = new_next;
        }
    }
}
