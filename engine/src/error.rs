//! Error types for the roster engine.

use crate::{draft::Field, validate::ValidationErrors, EmployeeId};
use thiserror::Error;

/// All possible errors from the roster engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Lookup errors
    #[error("record not found: {0}")]
    RecordNotFound(EmployeeId),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    // Write errors
    #[error("record already exists: {0}")]
    RecordAlreadyExists(EmployeeId),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("field {0} passed validation but could not be converted")]
    Unconvertible(Field),

    #[error("storage error: {0}")]
    Storage(String),

    // State errors
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
