//! rosterdb - a deterministic in-memory student-records registry
//!
//! Seven simultaneously consistent ordered indexes over one set of records:
//! a master identity index by id, two performance-tier indexes by gpa, and
//! four class-standing indexes by name. Insertion classifies a record into
//! the applicable indexes; removal excises it from all of them before the
//! owning copy is released.

pub mod cli;
pub mod index;
pub mod loader;
pub mod record;
pub mod registry;
