//! Provide utilities for resolving keyed collections of [`Future`]s.
mod from_entries;
mod resolve;

pub use from_entries::{FromEntries, from_entries};
pub use resolve::{ResolveProperties, resolve_properties};

#[cfg(test)]
mod test;
