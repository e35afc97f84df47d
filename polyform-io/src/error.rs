//! Error types for PLY I/O.

use std::path::PathBuf;
use thiserror::Error;

use polyform_types::MeshError;

/// Result type for PLY I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during PLY I/O.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A loaded file contained faces or vertices the mesh container
    /// rejects.
    #[error("malformed mesh data: {0}")]
    Mesh(#[from] MeshError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
