//! Interactive narrowing of search results
//!
//! [`InteractiveFinder`] wraps a [`NoteFinder`] and, when asked to, lets the
//! user narrow the matches in a picker before returning them:
//!
//! 1. the interactive marker is split out of the options ([`extract_interactive`]),
//! 2. the backend runs with the remaining options,
//! 3. matches are encoded as rows ([`rows::encode`]) and fed to a picker
//!    session configured with a preview and key bindings ([`build_bindings`]),
//! 4. the selected rows are mapped back to matches ([`rows::reconcile`]).
//!
//! Without the marker, or when nothing matched and `always_filter` is off,
//! the backend result is returned untouched.

pub mod bindings;
pub mod error;
pub mod intent;
pub mod rows;

pub use bindings::{CreateNoteAction, PreviewCommand, build_bindings, shell_quote};
pub use error::{FinderError, Result};
pub use intent::extract_interactive;

use crate::note::{FinderOpts, Match, NoteDir, NoteFinder};
use crate::style::Styler;
use crate::ui::{Picker, PickerConfig, PickerSession};
use log::debug;
use std::path::{Path, PathBuf};

/// Blank lines kept around the picker
pub const PICKER_PADDING: u16 = 2;

/// Behavior of an [`InteractiveFinder`]
#[derive(Debug, Clone, Default)]
pub struct InteractiveFinderOpts {
    /// Open the picker even when the search returned nothing
    pub always_filter: bool,
    /// When set, the picker offers to create a note in this directory
    pub new_note_dir: Option<NoteDir>,
}

/// Note finder that filters its backend's result through a picker
pub struct InteractiveFinder<F, P, S> {
    opts: InteractiveFinderOpts,
    finder: F,
    picker: P,
    styler: S,
    executable: Option<PathBuf>,
}

impl<F, P, S> InteractiveFinder<F, P, S>
where
    F: NoteFinder,
    P: Picker,
    S: Styler,
{
    /// Create a new interactive finder
    #[must_use]
    pub const fn new(opts: InteractiveFinderOpts, finder: F, picker: P, styler: S) -> Self {
        Self {
            opts,
            finder,
            picker,
            styler,
            executable: None,
        }
    }

    /// Use `path` as the program invoked by the preview and bindings instead
    /// of the current executable
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// The wrapped backend
    #[must_use]
    pub const fn backend(&self) -> &F {
        &self.finder
    }

    /// Search, narrowing interactively when `opts` carries an interactive
    /// marker set to `true`.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if the search, the picker or row styling fails.
    /// A cancelled picker returns an empty list.
    pub fn find(&self, opts: FinderOpts) -> Result<Vec<Match>> {
        let (interactive, opts) = extract_interactive(opts);
        self.find_with(interactive, opts)
    }

    /// Search, narrowing interactively when `interactive` is set.
    ///
    /// # Errors
    ///
    /// See [`InteractiveFinder::find`].
    pub fn find_with(&self, interactive: bool, opts: FinderOpts) -> Result<Vec<Match>> {
        let matches = self.finder.find(opts)?;

        if !interactive || (!self.opts.always_filter && matches.is_empty()) {
            return Ok(matches);
        }

        let executable = self.resolve_executable()?;
        let config = self.picker_config(&executable);

        let rows = matches
            .iter()
            .map(|note| rows::encode(note, &self.styler))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut session = self.picker.open(&config)?;
        for row in &rows {
            session.feed(row)?;
        }
        debug!("fed {} row(s) to the picker", rows.len());

        let selection = session.selection()?;
        Ok(rows::reconcile(&selection, &matches))
    }

    fn resolve_executable(&self) -> Result<PathBuf> {
        match &self.executable {
            Some(path) => Ok(path.clone()),
            None => std::env::current_exe().map_err(FinderError::ExecutableResolution),
        }
    }

    fn picker_config(&self, executable: &Path) -> PickerConfig {
        PickerConfig::new()
            .with_preview(PreviewCommand::new(executable).to_string())
            .with_padding(PICKER_PADDING)
            .with_bindings(build_bindings(self.opts.new_note_dir.as_ref(), executable))
    }
}
