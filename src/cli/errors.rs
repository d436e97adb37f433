//! CLI-specific error types

use thiserror::Error;

use crate::loader::LoaderError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The startup load failed before any row could be read
    #[error("load failed: {0}")]
    Loader(#[from] LoaderError),
}
