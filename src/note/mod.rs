//! Note data model and search backend abstraction
//!
//! A [`NoteFinder`] turns a set of [`FinderOpts`] into an ordered list of
//! [`Match`] records. The interactive layer in [`crate::finder`] wraps any
//! implementation of this trait; [`store::DirectoryFinder`] is the plain
//! filesystem implementation used by the `notepick` binary.

pub mod error;
pub mod store;

pub use error::{NoteError, Result};
pub use store::DirectoryFinder;

use serde::Serialize;

/// A note surfaced by a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Path of the note, relative to the notebook root. Unique per notebook.
    pub path: String,
    /// Title of the note
    pub title: String,
    /// Body lines, without the title line
    pub body: Vec<String>,
}

impl Match {
    /// Create a new match
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            body,
        }
    }
}

/// Search criterion understood by a [`NoteFinder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring that must appear in the title or body
    Match(String),
    /// Only keep notes located under one of these paths
    Path(Vec<String>),
    /// Ask for the results to be narrowed interactively.
    ///
    /// Consumed by [`crate::finder::InteractiveFinder`]; backends reject it.
    Interactive(bool),
}

/// Options for a single search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderOpts {
    /// Filters, applied in order
    pub filters: Vec<Filter>,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl FinderOpts {
    /// Create options from a list of filters
    #[must_use]
    pub const fn new(filters: Vec<Filter>) -> Self {
        Self {
            filters,
            limit: None,
        }
    }

    /// Limit the number of results
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// A directory of the notebook where new notes can be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDir {
    /// Path relative to the notebook root
    pub path: String,
    /// Display name, empty for the notebook root
    pub name: String,
}

impl NoteDir {
    /// Build a note directory from its relative path.
    ///
    /// The root (`""` or `"."`) gets an empty name.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim_end_matches('/');
        let name = if trimmed.is_empty() || trimmed == "." {
            String::new()
        } else {
            trimmed.to_string()
        };
        let path = if trimmed.is_empty() {
            ".".to_string()
        } else {
            trimmed.to_string()
        };
        Self { path, name }
    }
}

/// Search backend producing note matches
pub trait NoteFinder {
    /// Run a search
    ///
    /// # Errors
    ///
    /// Returns `NoteError` if the notes cannot be read or the options are
    /// not supported by the backend.
    fn find(&self, opts: FinderOpts) -> Result<Vec<Match>>;
}

impl<T: NoteFinder + ?Sized> NoteFinder for &T {
    fn find(&self, opts: FinderOpts) -> Result<Vec<Match>> {
        (**self).find(opts)
    }
}
