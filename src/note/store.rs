//! Filesystem note backend
//!
//! Every `*.md` file under the notebook root is a note. The first non-empty
//! line is the title (leading `#` markers stripped) and the remaining lines
//! form the body. Results are ordered by path.

use super::error::{NoteError, Result};
use super::{Filter, FinderOpts, Match, NoteFinder};
use heck::ToKebabCase;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Note backend reading markdown files from a directory
#[derive(Debug, Clone)]
pub struct DirectoryFinder {
    root: PathBuf,
}

impl DirectoryFinder {
    /// Create a finder over the notebook rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Notebook root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the full content of a note
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::IoError` if the file cannot be read.
    pub fn raw_content(&self, path: &str) -> Result<String> {
        let bytes = fs::read(self.root.join(path))?;
        Ok(match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!("{path} is not valid UTF-8, undecodable bytes are replaced");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }

    /// Load a single note by its notebook-relative path
    ///
    /// # Errors
    ///
    /// Returns `NoteError::IoError` if the file cannot be read.
    pub fn load(&self, path: &str) -> Result<Match> {
        let content = self.raw_content(path)?;
        Ok(parse_note(path, &content))
    }

    /// Create a new note titled `title` in the notebook directory `dir`.
    ///
    /// The file name is the kebab-cased title; a numeric suffix is appended
    /// when a note with that name already exists. Returns the path of the
    /// new note relative to the notebook root.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::IoError` if the directory or file cannot be created.
    pub fn create(&self, dir: &str, title: &str) -> Result<String> {
        let dir_path = match dir.trim_end_matches('/') {
            "" | "." => self.root.clone(),
            dir => self.root.join(dir),
        };
        fs::create_dir_all(&dir_path)?;

        let stem = match title.to_kebab_case() {
            stem if stem.is_empty() => "untitled".to_string(),
            stem => stem,
        };

        let mut candidate = dir_path.join(format!("{stem}.md"));
        let mut suffix = 2;
        while candidate.exists() {
            candidate = dir_path.join(format!("{stem}-{suffix}.md"));
            suffix += 1;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)?;
        writeln!(file, "# {title}")?;
        writeln!(file)?;

        self.relative(&candidate)
    }

    /// All note paths of the notebook, sorted
    fn note_paths(&self) -> Result<Vec<String>> {
        let root = self
            .root
            .to_str()
            .ok_or_else(|| NoteError::InvalidPath(self.root.display().to_string()))?;
        let pattern = format!("{}/**/*.md", glob::Pattern::escape(root));

        let mut paths = Vec::new();
        for entry in glob::glob(&pattern)? {
            let entry = entry?;
            if entry.is_file() {
                paths.push(self.relative(&entry)?);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn relative(&self, path: &Path) -> Result<String> {
        let rel = path
            .strip_prefix(&self.root)
            .map_err(|_| NoteError::InvalidPath(path.display().to_string()))?;

        let mut parts = Vec::new();
        for component in rel.components() {
            if let Component::Normal(part) = component {
                let part = part
                    .to_str()
                    .ok_or_else(|| NoteError::InvalidPath(path.display().to_string()))?;
                parts.push(part);
            }
        }
        Ok(parts.join("/"))
    }
}

impl NoteFinder for DirectoryFinder {
    fn find(&self, opts: FinderOpts) -> Result<Vec<Match>> {
        let mut queries = Vec::new();
        let mut prefixes: Option<Vec<String>> = None;

        for filter in opts.filters {
            match filter {
                Filter::Match(query) => queries.push(query.to_lowercase()),
                Filter::Path(paths) => prefixes.get_or_insert_with(Vec::new).extend(paths),
                Filter::Interactive(_) => {
                    return Err(NoteError::UnsupportedFilter("interactive".to_string()));
                }
            }
        }

        let mut matches = Vec::new();
        for path in self.note_paths()? {
            if opts.limit.is_some_and(|limit| matches.len() >= limit) {
                break;
            }
            if let Some(prefixes) = &prefixes
                && !prefixes.iter().any(|prefix| is_under(&path, prefix))
            {
                continue;
            }

            let note = self.load(&path)?;
            if queries.iter().all(|query| contains(&note, query)) {
                matches.push(note);
            }
        }

        debug!(
            "found {} note(s) in {}",
            matches.len(),
            self.root.display()
        );
        Ok(matches)
    }
}

fn parse_note(path: &str, content: &str) -> Match {
    let mut lines = content.lines();
    let title = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .unwrap_or_default();

    let mut body: Vec<String> = lines
        .skip_while(|line| line.trim().is_empty())
        .map(ToString::to_string)
        .collect();
    while body.last().is_some_and(|line| line.trim().is_empty()) {
        body.pop();
    }

    Match::new(path, title, body)
}

fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_start_matches("./").trim_end_matches('/');
    if prefix.is_empty() || prefix == "." {
        return true;
    }
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// `query` must already be lowercase
fn contains(note: &Match, query: &str) -> bool {
    note.title.to_lowercase().contains(query)
        || note
            .body
            .iter()
            .any(|line| line.to_lowercase().contains(query))
}
