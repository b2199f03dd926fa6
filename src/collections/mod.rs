//! Linear collection types, and the traits and cursors they share.
//!
//! # Method
//! [`DynamicArray`](contiguous::DynamicArray) and [`LinkedNodeList`](linked::LinkedNodeList) both
//! implement [`Sequence`](traits::Sequence), so code written against the trait (and the
//! [`cursor`]s it hands out) works unchanged with either. The array also implements
//! [`Deref<Target = [T]>`](std::ops::Deref), which saves writing some of the more repetitive
//! functionality.

pub mod contiguous;
pub mod cursor;
pub mod linked;
pub mod traits;

pub use crate::util::error;
