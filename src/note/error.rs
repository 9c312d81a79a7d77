//! Note backend error types

use thiserror::Error;

/// Errors raised by note search backends
#[derive(Debug, Error)]
pub enum NoteError {
    /// IO error while reading or writing notes
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid glob pattern built from the notebook path
    #[error("Invalid pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    /// Error while walking the notebook
    #[error("Failed to read notebook entry: {0}")]
    GlobError(#[from] glob::GlobError),

    /// Path cannot be represented as UTF-8
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Filter the backend does not handle
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),
}

/// Result type for note backend operations
pub type Result<T> = std::result::Result<T, NoteError>;
