//! Error types for the protocol planning library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all protocol operations.
///
/// Expected conditions (an unknown step id, an empty store, a missing
/// shutdown window) are never reported through this type; mutating
/// operations signal them with a `bool` return and a log line instead.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Storage backend connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Runtime plumbing errors (task join failures and the like)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ProtocolError {
    /// Creates a storage error with a context message.
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        ProtocolError::Storage {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProtocolError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an internal error from a task join failure.
    pub fn join(err: tokio::task::JoinError) -> Self {
        ProtocolError::Internal {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Extension trait for rusqlite Results to attach context while converting
/// into [`ProtocolError`].
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ProtocolError::storage(message, e))
    }
}

/// Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
