//! Picker commands and key bindings
//!
//! Commands handed to the picker are built from small value types that
//! render themselves with [`shell_quote`], so paths are escaped in one place.

use crate::note::NoteDir;
use crate::ui::{Binding, ID_COLUMN};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Key chord of the "create note" binding
pub const CREATE_NOTE_KEYS: &str = "Ctrl-N";

/// Placeholder the picker replaces with the current query
pub const QUERY_PLACEHOLDER: &str = "{q}";

/// Placeholder the picker replaces with the given column of the current row
#[must_use]
pub fn field_placeholder(column: usize) -> String {
    format!("{{{}}}", column + 1)
}

/// Quote a word for `sh`.
///
/// Words made only of unambiguous characters are returned as is; anything
/// else is wrapped in single quotes.
#[must_use]
pub fn shell_quote(word: &str) -> Cow<'_, str> {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if safe {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
    }
}

/// Picker action creating a note titled after the current query
///
/// Aborts the picker, then runs `<exe> new <dir> --title {q}` attached to the
/// terminal so the nested command can prompt. The command uses the colon form
/// of `execute`, which runs to the end of the binding, so parentheses in
/// quoted paths cannot close the action early.
#[derive(Debug, Clone, Copy)]
pub struct CreateNoteAction<'a> {
    executable: &'a Path,
    dir: &'a str,
}

impl<'a> CreateNoteAction<'a> {
    /// Create the action for a notebook directory
    #[must_use]
    pub const fn new(executable: &'a Path, dir: &'a str) -> Self {
        Self { executable, dir }
    }
}

impl fmt::Display for CreateNoteAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "abort+execute:{} new {} --title {} < /dev/tty > /dev/tty",
            shell_quote(&self.executable.to_string_lossy()),
            shell_quote(self.dir),
            QUERY_PLACEHOLDER
        )
    }
}

/// Preview command printing the raw content of the highlighted note
#[derive(Debug, Clone, Copy)]
pub struct PreviewCommand<'a> {
    executable: &'a Path,
}

impl<'a> PreviewCommand<'a> {
    /// Create the preview command
    #[must_use]
    pub const fn new(executable: &'a Path) -> Self {
        Self { executable }
    }
}

impl fmt::Display for PreviewCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} list --format raw-content {}",
            shell_quote(&self.executable.to_string_lossy()),
            field_placeholder(ID_COLUMN)
        )
    }
}

/// Key bindings offered in the picker.
///
/// With a directory, a single binding creates a note in it using the query
/// as title. Without one, no binding is offered.
#[must_use]
pub fn build_bindings(create_dir: Option<&NoteDir>, executable: &Path) -> Vec<Binding> {
    let Some(dir) = create_dir else {
        return Vec::new();
    };

    let mut description = String::from("create a note with the query as title");
    if !dir.name.is_empty() {
        description.push_str(&format!(" in {}/", dir.name));
    }

    vec![Binding::new(
        CREATE_NOTE_KEYS,
        description,
        CreateNoteAction::new(executable, &dir.path).to_string(),
    )]
}
