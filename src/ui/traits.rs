//! Core traits for the picker abstraction layer

use super::error::Result;
use super::types::{Binding, Row, Selection};

/// Configuration of one picker session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// Shell command rendering the preview of the highlighted row
    pub preview_command: Option<String>,
    /// Extra blank lines around the picker
    pub padding: u16,
    /// Key bindings, in display order
    pub bindings: Vec<Binding>,
}

impl PickerConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preview command
    #[must_use]
    pub fn with_preview(mut self, command: impl Into<String>) -> Self {
        self.preview_command = Some(command.into());
        self
    }

    /// Set the padding
    #[must_use]
    pub const fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Set the key bindings
    #[must_use]
    pub fn with_bindings(mut self, bindings: Vec<Binding>) -> Self {
        self.bindings = bindings;
        self
    }
}

/// Launches interactive picker sessions
///
/// This trait abstracts away the picker backend so the selection flow can be
/// driven by an external process (fzf) or by an in-process fake.
pub trait Picker {
    /// Session type returned by [`Picker::open`]
    type Session: PickerSession;

    /// Start a new session
    ///
    /// # Errors
    ///
    /// Returns `UiError::Launch` if the picker cannot be started.
    fn open(&self, config: &PickerConfig) -> Result<Self::Session>;
}

/// A running picker session
///
/// Each session owns exactly one picker instance. Dropping a session
/// without calling [`PickerSession::selection`] tears the picker down.
pub trait PickerSession {
    /// Send a candidate row to the picker
    ///
    /// # Errors
    ///
    /// Returns `UiError::Io` if the row cannot be written.
    fn feed(&mut self, row: &Row) -> Result<()>;

    /// Wait for the user to finish and return the chosen rows
    ///
    /// Blocks until the picker exits. A cancelled session yields an empty
    /// selection, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker output cannot be read or the picker
    /// failed.
    fn selection(self) -> Result<Selection>;
}

impl<T: Picker + ?Sized> Picker for &T {
    type Session = T::Session;

    fn open(&self, config: &PickerConfig) -> Result<Self::Session> {
        (**self).open(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_config_builder() {
        let binding = Binding::new("Ctrl-N", "create", "abort");
        let config = PickerConfig::new()
            .with_preview("cat {1}")
            .with_padding(2)
            .with_bindings(vec![binding.clone()]);

        assert_eq!(config.preview_command.as_deref(), Some("cat {1}"));
        assert_eq!(config.padding, 2);
        assert_eq!(config.bindings, vec![binding]);
    }

    #[test]
    fn test_picker_config_default_is_empty() {
        let config = PickerConfig::new();
        assert!(config.preview_command.is_none());
        assert_eq!(config.padding, 0);
        assert!(config.bindings.is_empty());
    }
}
