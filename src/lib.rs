//! Two interchangeable linear collections: a growable contiguous array and a doubly-linked list.
//!
//! # Purpose
//! Both collections expose the same position-based interface, modelled on the iterator pairs of
//! classic container libraries: a collection hands out positions, positions can be stepped in
//! either direction, and insertion and erasure happen at a position. Unlike those libraries, every
//! position is checked. Stepping past either end, dereferencing the end position, using a position
//! from another collection or one invalidated by an earlier edit all fail with an error instead of
//! being undefined.
//!
//! # Error Handling
//! Fallible operations come in pairs. The `try_` form returns a [`Result`] holding a strongly typed
//! [`SequenceError`](collections::error::SequenceError), an enum over small structs that each
//! implement [`Error`](std::error::Error). The plain form panics with the same message, because
//! users don't want to be forced to handle an error every time they step a cursor they know is in
//! range.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or any other `std` collection internally. It depends on some
//! derive macros because they remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
