//! CLI module for rosterdb
//!
//! Provides the interactive menu over the registry:
//! - create: prompt for a record and admit it
//! - read: eight ordered views over the indexes
//! - delete: remove a record by id
//! - exit

mod args;
mod commands;
mod display;
mod errors;

pub use args::Cli;
pub use commands::run;
pub use display::{render_student, NO_MATCH};
pub use errors::{CliError, CliResult};
