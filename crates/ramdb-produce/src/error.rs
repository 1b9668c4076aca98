//! Error types for the produce service

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use ramdb_core::RamError;

/// Produce service error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProduceError {
    /// Store operation failed
    Store(RamError),

    /// Reading the init file failed
    Io {
        /// File being read
        path: PathBuf,
        /// The underlying I/O error kind
        kind: std::io::ErrorKind,
        /// Human-readable description
        message: String,
    },

    /// Init file is not a JSON array of items
    InitFile {
        /// File being parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Encoding catalog output failed
    Encode {
        /// Encoder message
        message: String,
    },

    /// Configuration rejected by `Config::validate`
    Config(String),
}

impl fmt::Display for ProduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProduceError::Store(e) => write!(f, "store error: {}", e),
            ProduceError::Io { path, kind, message } => {
                write!(f, "I/O error in {}: {} ({})", path.display(), message, kind)
            }
            ProduceError::InitFile { path, message } => {
                write!(f, "could not parse items in {}: {}", path.display(), message)
            }
            ProduceError::Encode { message } => write!(f, "could not encode items: {}", message),
            ProduceError::Config(message) => write!(f, "invalid configuration: {}", message),
        }
    }
}

impl Error for ProduceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProduceError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RamError> for ProduceError {
    fn from(err: RamError) -> Self {
        ProduceError::Store(err)
    }
}

/// Result type alias for produce operations
pub type ProduceResult<T> = Result<T, ProduceError>;
