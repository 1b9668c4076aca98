//! Error types for RamDB operations
//!
//! All engine errors are represented by the RamError enum. Every operation
//! either succeeds with a defined result or fails with exactly one variant.
//! The engine never logs or retries; errors go straight back to the caller.

use std::fmt;
use std::error::Error;

/// RamDB error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RamError {
    /// Table handle does not refer to a created table
    NoTable,

    /// A table with this name is already registered
    TableExists,

    /// No index is registered for the requested column
    NoIndex,

    /// Index column name is empty
    InvalidIndex,

    /// An index is already registered for the column
    IndexExists,

    /// No record with the key's id exists in the index
    NoRecord,

    /// A record with the key's id already exists in the index
    RecordExists,

    /// Payload could not be encoded into the record
    Serialization {
        /// Encoder message
        message: String,
    },

    /// Stored bytes could not be decoded into the destination type
    Deserialization {
        /// Decoder message
        message: String,
    },
}

/// Broad classes of engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller addressed a table or column that was never set up.
    /// Not retryable without fixing setup.
    Structural,
    /// Invalid argument to index creation.
    Validation,
    /// Duplicate creation of a table, index or record.
    Conflict,
    /// Expected record is missing.
    Absence,
    /// Payload encode or decode failure.
    Serialization,
}

impl RamError {
    /// Which class of failure this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RamError::NoTable | RamError::NoIndex => ErrorCategory::Structural,
            RamError::InvalidIndex => ErrorCategory::Validation,
            RamError::TableExists | RamError::IndexExists | RamError::RecordExists => {
                ErrorCategory::Conflict
            }
            RamError::NoRecord => ErrorCategory::Absence,
            RamError::Serialization { .. } | RamError::Deserialization { .. } => {
                ErrorCategory::Serialization
            }
        }
    }
}

impl fmt::Display for RamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RamError::NoTable => write!(f, "table does not exist"),
            RamError::TableExists => write!(f, "table already exists"),
            RamError::NoIndex => write!(f, "index does not exist"),
            RamError::InvalidIndex => write!(f, "invalid index column"),
            RamError::IndexExists => write!(f, "index already exists"),
            RamError::NoRecord => write!(f, "record does not exist"),
            RamError::RecordExists => write!(f, "record already exists"),
            RamError::Serialization { message } => {
                write!(f, "record serialization failed: {}", message)
            }
            RamError::Deserialization { message } => {
                write!(f, "record deserialization failed: {}", message)
            }
        }
    }
}

impl Error for RamError {}

/// Result type alias for RamDB operations
pub type RamResult<T> = Result<T, RamError>;
