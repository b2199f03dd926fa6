mod iter;
mod linked_node_list;
mod position;
mod slot;

pub use iter::*;
pub use linked_node_list::*;
pub use position::*;
pub(crate) use slot::*;
