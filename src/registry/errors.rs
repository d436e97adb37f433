//! Registry error types
//!
//! All registry errors are recoverable: they are reported to the immediate
//! caller as a result value and the registry is left unchanged.

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No record with the given id exists
    #[error("no student with id {0}")]
    RecordNotFound(String),

    /// A record with the given id is already registered
    #[error("a student with id {0} is already registered")]
    DuplicateId(String),
}
