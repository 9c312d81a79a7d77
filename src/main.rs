//! Notepick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # List every note of the notebook in the current directory
//! notepick list
//!
//! # Narrow notes mentioning "rust" in fzf, offering Ctrl-N to create one in inbox/
//! notepick list -m rust -i --new-dir inbox
//!
//! # Create a note, prompting for the title
//! notepick new journal
//!
//! # Debug logging on stderr
//! notepick -vv list -i
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/notepick/config.toml` on Linux); `notepick config path`
//! prints the exact location.

use notepick::{
    NotepickError,
    cli::{Cli, Commands},
    commands, logging, output,
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, NotepickError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    logging::init(cli.verbose)?;

    let config = notepick::config::NotepickConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::List(args) => {
            let notebook = config.notebook_root(cli.notebook.as_deref())?;
            commands::list(&config, &notebook, args, quiet)
        }
        Commands::New(args) => {
            let notebook = config.notebook_root(cli.notebook.as_deref())?;
            commands::new(&notebook, args, quiet)
        }
        Commands::Config { command } => commands::config(&config, *command),
    }
}
