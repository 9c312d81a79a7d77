//! Terminal styling for picker rows
//!
//! The picker displays colored columns (`fzf --ansi`). A [`Styler`] turns
//! plain text into styled text for a semantic [`Rule`]; [`ColoredStyler`]
//! maps rules to colors through the `colored` crate.

mod error;

pub use error::{Result, StyleError};

use colored::{Color, Colorize};
use std::fmt;
use std::str::FromStr;

/// Semantic styling rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Stands out, used for titles
    Emphasis,
    /// Secondary content, used for note bodies
    Muted,
}

impl Rule {
    /// Name of the rule as used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Emphasis => "emphasis",
            Self::Muted => "muted",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders plain text into terminal-styled text
pub trait Styler {
    /// Style `text` according to `rule`
    ///
    /// # Errors
    ///
    /// Returns `StyleError` if the rule cannot be applied.
    fn style(&self, text: &str, rule: Rule) -> Result<String>;
}

impl<T: Styler + ?Sized> Styler for &T {
    fn style(&self, text: &str, rule: Rule) -> Result<String> {
        (**self).style(text, rule)
    }
}

/// Styler backed by `colored`, with one color name per rule
///
/// Color names are the ones `colored` understands (`"yellow"`,
/// `"bright black"`, ...). They are resolved when styling so that a bad
/// theme surfaces as a [`StyleError`] at the point of use.
#[derive(Debug, Clone)]
pub struct ColoredStyler {
    emphasis: String,
    muted: String,
}

impl ColoredStyler {
    /// Create a styler from color names
    #[must_use]
    pub fn new(emphasis: impl Into<String>, muted: impl Into<String>) -> Self {
        Self {
            emphasis: emphasis.into(),
            muted: muted.into(),
        }
    }

    fn color_for(&self, rule: Rule) -> Result<Color> {
        let name = match rule {
            Rule::Emphasis => &self.emphasis,
            Rule::Muted => &self.muted,
        };
        Color::from_str(name).map_err(|()| StyleError::UnknownColor {
            rule,
            color: name.clone(),
        })
    }
}

impl Default for ColoredStyler {
    fn default() -> Self {
        Self::new("yellow", "bright black")
    }
}

impl Styler for ColoredStyler {
    fn style(&self, text: &str, rule: Rule) -> Result<String> {
        let color = self.color_for(rule)?;
        Ok(text.color(color).to_string())
    }
}
