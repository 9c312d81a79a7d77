//! Testing utilities for notepick
//!
//! This module provides fixtures for unit tests: a temporary notebook, a
//! styler that marks rules in plain text, and an in-memory search backend.
//!
//! Only available when compiled with `cfg(test)`.

use crate::note::{DirectoryFinder, FinderOpts, Match, NoteError, NoteFinder};
use crate::style::{Rule, Styler};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary notebook directory, removed on drop
pub struct TestNotebook {
    dir: TempDir,
}

impl TestNotebook {
    /// Create an empty notebook
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary notebook"),
        }
    }

    /// Notebook root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a note, creating parent directories as needed
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create note directory");
        }
        fs::write(path, content).expect("Failed to write note");
    }

    /// Backend over this notebook
    pub fn finder(&self) -> DirectoryFinder {
        DirectoryFinder::new(self.dir.path())
    }
}

/// Styler wrapping text in `[rule]` markers instead of colors
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, text: &str, rule: Rule) -> crate::style::Result<String> {
        Ok(format!("[{rule}]{text}"))
    }
}

/// Backend returning fixed matches and recording the options it received
#[derive(Debug, Default)]
pub struct StaticFinder {
    matches: Vec<Match>,
    fail: bool,
    received: RefCell<Vec<FinderOpts>>,
}

impl StaticFinder {
    /// Backend always returning `matches`
    pub fn new(matches: Vec<Match>) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    /// Backend always failing
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Options passed to every `find` call so far
    pub fn received(&self) -> Vec<FinderOpts> {
        self.received.borrow().clone()
    }
}

impl NoteFinder for StaticFinder {
    fn find(&self, opts: FinderOpts) -> crate::note::Result<Vec<Match>> {
        self.received.borrow_mut().push(opts);
        if self.fail {
            return Err(NoteError::InvalidPath("unreadable".to_string()));
        }
        Ok(self.matches.clone())
    }
}
