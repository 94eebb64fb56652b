//! A FIFO queue of strings over a singly linked list.
//!
//! [`Queue`] owns its elements outright and takes all of its storage from a
//! [`RawAlloc`], so a refused allocation surfaces as an error and leaves the
//! queue untouched. [`compat`] wraps the same operations for callers that
//! hold an optional queue and want boolean results.

pub mod compat;
mod error;
pub mod queue;
pub mod raw;

pub use crate::error::{QueueError, QueueResult};
pub use crate::queue::{Queue, QueueBox, Removed};
pub use crate::raw::{AllocError, FailPolicy, FaultyAlloc, Global, RawAlloc};
