//! Mock picker for testing

use super::error::{Result, UiError};
use super::traits::{Picker, PickerConfig, PickerSession};
use super::types::{Row, Selection};
use std::cell::{Ref, RefCell};
use std::io;
use std::rc::Rc;

/// What a [`MockPicker`] saw during its sessions
#[derive(Debug, Default)]
pub struct MockLog {
    /// Number of sessions opened
    pub opened: usize,
    /// Configuration of the last session
    pub config: Option<PickerConfig>,
    /// Rows fed to the last session
    pub fed: Vec<Row>,
}

/// Mock picker that returns predetermined selections
///
/// Selected identifiers are resolved against the rows fed to the session,
/// the way fzf echoes back full lines. Identifiers that were never fed come
/// back as single-column rows.
#[derive(Debug, Clone, Default)]
pub struct MockPicker {
    /// Identifiers to return as selected, in order
    pub predetermined_selection: Vec<String>,
    /// Whether to simulate user abort
    pub should_abort: bool,
    /// Whether to simulate a missing picker executable
    pub fail_launch: bool,
    /// Whether writing rows to the picker fails
    pub fail_feed: bool,
    /// Whether reading the selection fails
    pub fail_selection: bool,
    log: Rc<RefCell<MockLog>>,
}

impl MockPicker {
    /// Create a new mock picker with predetermined selections
    #[must_use]
    pub fn new(selections: &[&str]) -> Self {
        Self {
            predetermined_selection: selections.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Create a mock picker that simulates user abort
    #[must_use]
    pub fn aborted() -> Self {
        Self {
            should_abort: true,
            ..Self::default()
        }
    }

    /// Create a mock picker that cannot be launched
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    /// Create a mock picker whose input pipe breaks
    #[must_use]
    pub fn failing_feed() -> Self {
        Self {
            fail_feed: true,
            ..Self::default()
        }
    }

    /// Create a mock picker that exits with an error instead of a selection
    #[must_use]
    pub fn failing_selection(selections: &[&str]) -> Self {
        Self {
            fail_selection: true,
            ..Self::new(selections)
        }
    }

    /// Sessions recorded so far
    #[must_use]
    pub fn log(&self) -> Ref<'_, MockLog> {
        self.log.borrow()
    }
}

impl Picker for MockPicker {
    type Session = MockSession;

    fn open(&self, config: &PickerConfig) -> Result<MockSession> {
        if self.fail_launch {
            return Err(UiError::Launch {
                command: "mock".to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        let mut log = self.log.borrow_mut();
        log.opened += 1;
        log.config = Some(config.clone());
        log.fed.clear();

        Ok(MockSession {
            selection: self.predetermined_selection.clone(),
            should_abort: self.should_abort,
            fail_feed: self.fail_feed,
            fail_selection: self.fail_selection,
            log: Rc::clone(&self.log),
        })
    }
}

/// Session of a [`MockPicker`]
#[derive(Debug)]
pub struct MockSession {
    selection: Vec<String>,
    should_abort: bool,
    fail_feed: bool,
    fail_selection: bool,
    log: Rc<RefCell<MockLog>>,
}

impl PickerSession for MockSession {
    fn feed(&mut self, row: &Row) -> Result<()> {
        if self.fail_feed {
            return Err(io::Error::other("mock picker input closed").into());
        }
        self.log.borrow_mut().fed.push(row.clone());
        Ok(())
    }

    fn selection(self) -> Result<Selection> {
        if self.fail_selection {
            return Err(io::Error::other("mock picker output unreadable").into());
        }
        if self.should_abort {
            return Ok(Selection::new());
        }

        let log = self.log.borrow();
        Ok(self
            .selection
            .iter()
            .map(|id| {
                log.fed
                    .iter()
                    .find(|row| row.id() == Some(id.as_str()))
                    .cloned()
                    .unwrap_or_else(|| Row::new([id]))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_picker_with_selections() {
        let picker = MockPicker::new(&["b.md", "a.md"]);
        let mut session = picker.open(&PickerConfig::new()).unwrap();
        session.feed(&Row::new(["a.md", "A"])).unwrap();
        session.feed(&Row::new(["b.md", "B"])).unwrap();
        let selection = session.selection().unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection[0].columns(), ["b.md", "B"]);
        assert_eq!(selection[1].columns(), ["a.md", "A"]);
        assert_eq!(picker.log().opened, 1);
        assert_eq!(picker.log().fed.len(), 2);
    }

    #[test]
    fn test_mock_picker_aborted() {
        let picker = MockPicker::aborted();
        let session = picker.open(&PickerConfig::new()).unwrap();
        assert!(session.selection().unwrap().is_empty());
    }

    #[test]
    fn test_mock_picker_unknown_id() {
        let picker = MockPicker::new(&["ghost.md"]);
        let session = picker.open(&PickerConfig::new()).unwrap();
        let selection = session.selection().unwrap();
        assert_eq!(selection, vec![Row::new(["ghost.md"])]);
    }

    #[test]
    fn test_mock_picker_failing() {
        let picker = MockPicker::failing();
        assert!(matches!(
            picker.open(&PickerConfig::new()),
            Err(UiError::Launch { .. })
        ));
        assert_eq!(picker.log().opened, 0);
    }

    #[test]
    fn test_mock_picker_failing_feed() {
        let picker = MockPicker::failing_feed();
        let mut session = picker.open(&PickerConfig::new()).unwrap();
        assert!(matches!(
            session.feed(&Row::new(["a.md"])),
            Err(UiError::IoError(_))
        ));
        assert!(picker.log().fed.is_empty());
    }

    #[test]
    fn test_mock_picker_failing_selection() {
        let picker = MockPicker::failing_selection(&["a.md"]);
        let mut session = picker.open(&PickerConfig::new()).unwrap();
        session.feed(&Row::new(["a.md"])).unwrap();
        assert!(matches!(session.selection(), Err(UiError::IoError(_))));
    }
}
