//! New command - create a note in the notebook

use crate::{NotepickError, cli::NewArgs, note::DirectoryFinder, output};
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::Path;

type Result<T> = std::result::Result<T, NotepickError>;

/// Execute the new command
///
/// Prints the path of the created note, relative to the notebook.
///
/// # Errors
///
/// Returns `NotepickError` if the title prompt fails or the note cannot be
/// written.
pub fn execute(notebook: &Path, args: &NewArgs, quiet: bool) -> Result<()> {
    let title = match args.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => prompt_title()?,
    };

    let path = DirectoryFinder::new(notebook).create(&args.dir, &title)?;
    println!("{path}");
    output::success(&format!("Created note '{title}'"), quiet);
    Ok(())
}

fn prompt_title() -> Result<String> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()?;
    Ok(title.trim().to_string())
}
