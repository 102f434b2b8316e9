//! Error taxonomy for directory and storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for directory and storage operations.
pub type Result<T> = std::result::Result<T, AgendaError>;

/// Errors raised by [`crate::directory::Directory`] and the contact stores.
///
/// Validation, duplicate and not-found errors are always raised before any
/// state is touched.
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("invalid contact: {0}")]
    Validation(String),

    #[error("contact '{name}' already exists")]
    DuplicateName { name: String },

    #[error("contact '{name}' not found")]
    NotFound { name: String },

    #[error("corrupt contact data at line {line}: {reason}")]
    CorruptData { line: usize, reason: String },

    #[error("storage I/O error on {}: {source}", .path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AgendaError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageIo {
            path: path.into(),
            source,
        }
    }
}
