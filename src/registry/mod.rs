//! Student registry
//!
//! The registry owns the authoritative record store and the seven ordered
//! indexes, and keeps them mutually consistent across insertion and removal.
//!
//! # API
//!
//! - `insert(student)` - Classify and admit a record into every applicable index
//! - `remove_by_id(id)` - Excise a record from every index, then release it
//! - `find_by_id(id)` - Read-only lookup in the identity index
//! - `load_rows(rows)` - Bulk admission, stopping at the first error
//! - `teardown()` - Release every record and all index storage

mod classify;
mod errors;
mod manager;

pub use classify::{classify, ClassStanding, Placement, TierList};
pub use errors::{RegistryError, RegistryResult};
pub use manager::{Admission, LoadReport, Registry};
