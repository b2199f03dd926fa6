//! Node-based collections, which keep their elements in place however the collection is edited.

pub mod list;

#[doc(inline)]
pub use list::LinkedNodeList;
