//! Loader error types

use thiserror::Error;

use crate::registry::RegistryError;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Loader errors
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The source file could not be opened or read
    #[error("unable to open source: {0}")]
    Io(#[from] std::io::Error),

    /// A row failed to parse; rows after it are not attempted
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source, header included
        line: u64,
        /// What failed to parse
        reason: String,
    },

    /// The registry rejected a row
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
