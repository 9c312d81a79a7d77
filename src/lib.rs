//! Notepick - interactive fzf selection for note search results
//!
//! This library sits between a note search backend and the `fzf` picker:
//! it decides when to go interactive, feeds matches to the picker as
//! one-line rows, and maps the user's choice back to the original matches.
//! See [`finder::InteractiveFinder`] for the entry point.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod finder;
pub mod logging;
pub mod note;
pub mod output;
pub mod style;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NotepickError {
    /// Note backend error
    #[error("Note error: {0}")]
    NoteError(#[from] note::NoteError),
    /// Interactive selection error
    #[error("{0}")]
    FinderError(#[from] finder::FinderError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Logger could not be started
    #[error("Logging error: {0}")]
    LoggingError(#[from] flexi_logger::FlexiLoggerError),
    /// Prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
