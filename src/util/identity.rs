use std::num::NonZero;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// A process-unique tag given to every collection on construction (including clones), and copied
/// into every position the collection hands out. It lets a collection recognise positions that
/// were produced by a different instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(NonZero<u64>);

impl OwnerId {
    /// Claims the next unused id.
    ///
    /// # Panics
    /// Panics if the id space is exhausted, which would take centuries of constant allocation.
    pub fn fresh() -> OwnerId {
        let id = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
        match NonZero::new(id) {
            Some(id) => OwnerId(id),
            None => panic!("Collection identifiers exhausted!"),
        }
    }
}
