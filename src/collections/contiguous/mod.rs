//! Contiguous collection types. Currently that is only [`DynamicArray`], backed by a raw buffer
//! that it manages by hand.

mod buffer;
pub mod dynamic_array;

pub(crate) use buffer::Buffer;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
