//! List command - search notes and optionally narrow them in fzf

use crate::{
    NotepickError,
    cli::{ListArgs, ListFormat},
    config::{NOTEBOOK_ENV, NotepickConfig},
    finder::InteractiveFinder,
    note::{DirectoryFinder, Match},
    output,
    ui::FzfPicker,
};
use log::info;
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, NotepickError>;

/// Execute the list command
///
/// # Errors
///
/// Returns `NotepickError` if the search or the picker fails, or if the
/// output cannot be written.
pub fn execute(config: &NotepickConfig, notebook: &Path, args: &ListArgs, quiet: bool) -> Result<()> {
    let mut opts = config.finder_opts(args.new_dir.as_deref());
    opts.always_filter |= args.always_filter;

    // The preview and Ctrl-N run from fzf and must target the same notebook
    let notebook = std::path::absolute(notebook)?;
    let picker = FzfPicker::with_command(config.fzf_command.clone())
        .with_env(NOTEBOOK_ENV, notebook.as_os_str());

    let finder = InteractiveFinder::new(
        opts,
        DirectoryFinder::new(&notebook),
        picker,
        config.theme.styler(),
    );

    let matches = finder.find(args.finder_opts())?;
    info!("listing {} note(s) as {:?}", matches.len(), args.format);

    print_matches(finder.backend(), &matches, args.format)?;

    if reports_no_notes(args, &matches) {
        output::info("No notes found.", quiet);
    }
    Ok(())
}

/// Whether an empty result gets the "No notes found." message. Picker
/// sessions and block formats stay silent.
fn reports_no_notes(args: &ListArgs, matches: &[Match]) -> bool {
    matches.is_empty()
        && !args.interactive
        && !matches!(args.format, ListFormat::RawContent | ListFormat::Json)
}

fn print_matches(backend: &DirectoryFinder, matches: &[Match], format: ListFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut out, matches)?;
            writeln!(out)?;
        }
        ListFormat::RawContent => {
            for note in matches {
                let content = backend.raw_content(&note.path)?;
                write!(out, "{content}")?;
                if !content.ends_with('\n') {
                    writeln!(out)?;
                }
            }
        }
        ListFormat::Path | ListFormat::Title | ListFormat::Long => {
            for note in matches {
                if let Some(line) = output::format_match(note, format) {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
