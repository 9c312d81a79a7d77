//! Conversion between note matches and picker rows

use crate::note::Match;
use crate::style::{Result, Rule, Styler};
use crate::ui::{Row, Selection};

/// Encode a match as a picker row: path, styled title, styled one-line body.
///
/// # Errors
///
/// Returns `StyleError` if the title or body cannot be styled.
pub fn encode<S: Styler + ?Sized>(note: &Match, styler: &S) -> Result<Row> {
    let title = styler.style(&note.title, Rule::Emphasis)?;
    let body = styler.style(&note.body.join(" "), Rule::Muted)?;
    Ok(Row::new([note.path.as_str(), title.as_str(), body.as_str()]))
}

/// Map selected rows back to the matches they were encoded from.
///
/// The result follows selection order. Rows whose identifier matches no note
/// are skipped; a row selected twice yields its note twice.
#[must_use]
pub fn reconcile(selection: &Selection, matches: &[Match]) -> Vec<Match> {
    selection
        .iter()
        .filter_map(|row| {
            let id = row.id()?;
            matches.iter().find(|note| note.path == id).cloned()
        })
        .collect()
}
