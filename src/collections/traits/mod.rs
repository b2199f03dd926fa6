//! Traits shared by the collections of this crate.

mod sequence;

pub use sequence::*;
