//! Output formatting for CLI display
//!
//! This module provides utilities for formatting matches and status
//! messages printed by the `notepick` binary.

use crate::cli::ListFormat;
use crate::note::Match;
use colored::Colorize;

/// Format a match for one of the line-based list formats.
///
/// Returns `None` for formats that are not line based (`raw-content`,
/// `json`), which the list command renders itself.
#[must_use]
pub fn format_match(note: &Match, format: ListFormat) -> Option<String> {
    match format {
        ListFormat::Path => Some(note.path.clone()),
        ListFormat::Title => Some(note.title.clone()),
        ListFormat::Long => Some(long(note)),
        ListFormat::RawContent | ListFormat::Json => None,
    }
}

fn long(note: &Match) -> String {
    let mut line = format!("{} {}", note.title.yellow(), note.path.dimmed());
    if let Some(first) = note.body.iter().find(|l| !l.trim().is_empty()) {
        line.push_str(&format!("\n  {}", first.trim()));
    }
    line
}

/// Print a success message unless `quiet`
pub fn success(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", "✓".green(), message);
    }
}

/// Print an informational message unless `quiet`
pub fn info(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", message.dimmed());
    }
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Match {
        Match::new("journal/day.md", "Day one", vec![String::new(), "  went hiking".into()])
    }

    #[test]
    fn test_path_and_title_formats() {
        assert_eq!(format_match(&note(), ListFormat::Path).as_deref(), Some("journal/day.md"));
        assert_eq!(format_match(&note(), ListFormat::Title).as_deref(), Some("Day one"));
    }

    #[test]
    fn test_long_format_includes_first_body_line() {
        let formatted = format_match(&note(), ListFormat::Long).unwrap();
        assert!(formatted.contains("Day one"));
        assert!(formatted.contains("journal/day.md"));
        assert!(formatted.ends_with("\n  went hiking"));
    }

    #[test]
    fn test_block_formats_are_not_line_based() {
        assert!(format_match(&note(), ListFormat::RawContent).is_none());
        assert!(format_match(&note(), ListFormat::Json).is_none());
    }
}
