//! Delimited-source loader
//!
//! Reads student rows from a comma-separated file (header row skipped) and
//! admits them into a registry as they parse.

mod errors;
mod source;

pub use errors::{LoaderError, LoaderResult};
pub use source::{load_path, load_reader, LoadOutcome, RawRow};
