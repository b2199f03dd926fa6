#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod identity;
pub mod panic;
pub mod result;
