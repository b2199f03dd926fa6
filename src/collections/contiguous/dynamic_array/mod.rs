//! A module containing [`DynamicArray`] and associated types.
//!
//! [`ArrayPosition`] names a place in a DynamicArray and [`IntoIter`] provides owned iteration.
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used
//! for borrowed iteration.

mod dynamic_array;
mod iter;
mod position;
mod tests;

pub use dynamic_array::*;
pub use iter::*;
pub use position::*;
