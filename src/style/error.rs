//! Styling error types

use super::Rule;
use thiserror::Error;

/// Errors that can occur while styling text
#[derive(Debug, Error)]
pub enum StyleError {
    /// The color configured for a rule is not a known terminal color
    #[error("Unknown color '{color}' for style rule '{rule}'")]
    UnknownColor {
        /// Rule being applied
        rule: Rule,
        /// Configured color name
        color: String,
    },
}

/// Result type for styling operations
pub type Result<T> = std::result::Result<T, StyleError>;
