//! Utilities for resolving keyed collections of pending values.
#![warn(missing_docs, missing_debug_implementations)]

mod entries;
mod value;

pub mod futures;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use entries::Entries;
pub use value::{Value, ValueFuture};
