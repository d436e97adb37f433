//! Ordered roster indexes
//!
//! Each index is one sorted ordering over a subset of the registry's records.
//! Indexes never own record data; they hold student ids as handles into the
//! registry's owning store.

mod order;
mod roster;

pub use order::{OrderKey, SortOrder};
pub use roster::RosterIndex;
