use crate::util::identity::OwnerId;

/// A place in a [`LinkedNodeList`](super::LinkedNodeList): the arena slot of a node (or of the
/// guardian, for the end position), stamped with the list it came from and the slot's stamp at the
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePosition {
    pub(crate) owner: OwnerId,
    pub(crate) slot: usize,
    pub(crate) stamp: u64,
}
