//! UI error types

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur in picker operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The picker process could not be started
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        /// Picker executable
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// IO error while talking to the picker
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The picker exited with an unexpected status
    #[error("Picker failed with {0}")]
    Exit(ExitStatus),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
