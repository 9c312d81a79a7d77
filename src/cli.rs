//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for notepick using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: List notes of the notebook, optionally narrowing them in fzf
//! - **new**: Create a note (also invoked by the picker's Ctrl-N binding)
//! - **config**: Show the configuration file path or effective settings
//!
//! The picker calls back into the binary: its preview runs
//! `notepick list --format raw-content <path>` and Ctrl-N runs
//! `notepick new <dir> --title <query>`.

use crate::note::{Filter, FinderOpts};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format of the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Note paths, one per line
    #[default]
    Path,
    /// Note titles, one per line
    Title,
    /// Title, path and first body line
    Long,
    /// Full file content of each note
    RawContent,
    /// JSON array of matches
    Json,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "notepick")]
#[command(about = "Search notes and pick them interactively with fzf", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Notebook directory (overrides config)
    #[arg(long = "notebook", value_name = "DIR", global = true)]
    pub notebook: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List notes, optionally narrowing them interactively
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Create a new note
    New(NewArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments of the list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only list notes under these paths
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Only list notes containing this text
    #[arg(short = 'm', long = "match", value_name = "QUERY")]
    pub query: Option<String>,

    /// Narrow the results in fzf
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Maximum number of notes
    #[arg(short = 'n', long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = ListFormat::Path)]
    pub format: ListFormat,

    /// Offer Ctrl-N in the picker to create a note in DIR
    #[arg(long = "new-dir", value_name = "DIR", requires = "interactive")]
    pub new_dir: Option<String>,

    /// Open the picker even when nothing matched (overrides config)
    #[arg(long = "always-filter", requires = "interactive")]
    pub always_filter: bool,
}

impl ListArgs {
    /// Search options described by these arguments
    #[must_use]
    pub fn finder_opts(&self) -> FinderOpts {
        let mut filters = Vec::new();
        if let Some(query) = &self.query {
            filters.push(Filter::Match(query.clone()));
        }
        if !self.paths.is_empty() {
            filters.push(Filter::Path(self.paths.clone()));
        }
        if self.interactive {
            filters.push(Filter::Interactive(true));
        }
        FinderOpts::new(filters).with_limit(self.limit)
    }
}

/// Arguments of the new command
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Directory of the notebook to create the note in
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Title of the note; prompted for when missing or empty
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the path of the configuration file
    Path,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
