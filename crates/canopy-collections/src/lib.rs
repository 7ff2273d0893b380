//! Growable array and FIFO queue primitives for canopy.
//!
//! This crate provides the low-level sequence containers used by the
//! rest of the canopy ecosystem: a doubling dynamic array and an
//! unbounded ring-buffer queue.

mod array;
mod error;
mod queue;

pub use array::DynArray;
pub use error::CollectionError;
pub use queue::Queue;
