//! Interactive finder error types
//!
//! Every failure of [`super::InteractiveFinder::find`] maps to one variant.
//! A cancelled picker is not an error: it yields an empty result.

use crate::note::NoteError;
use crate::style::StyleError;
use crate::ui::UiError;
use thiserror::Error;

/// Errors returned by the interactive finder
#[derive(Debug, Error)]
pub enum FinderError {
    /// The search backend failed; no picker was started
    #[error("Search failed: {0}")]
    Backend(#[from] NoteError),

    /// The path of the running executable could not be determined
    #[error("Cannot resolve the current executable: {0}")]
    ExecutableResolution(#[source] std::io::Error),

    /// The picker could not be started
    #[error("Cannot start the picker: {0}")]
    SessionLaunch(#[source] UiError),

    /// A row could not be styled
    #[error("Cannot style picker rows: {0}")]
    Style(#[from] StyleError),

    /// Feeding rows to the picker or reading its selection failed
    #[error("Picker I/O failed: {0}")]
    SelectionIo(#[source] UiError),
}

impl From<UiError> for FinderError {
    fn from(err: UiError) -> Self {
        match err {
            UiError::Launch { .. } => Self::SessionLaunch(err),
            UiError::IoError(_) | UiError::Exit(_) => Self::SelectionIo(err),
        }
    }
}

/// Result type for interactive finder operations
pub type Result<T> = std::result::Result<T, FinderError>;
