//! Configuration module for notepick
//!
//! Configuration is read from `config.toml` in the user's config directory
//! (`~/.config/notepick/config.toml` on Linux) and can be overridden with
//! `NOTEPICK_*` environment variables, e.g. `NOTEPICK_ALWAYS_FILTER=true` or
//! `NOTEPICK_THEME__TITLE=cyan`. A missing file means defaults.

use crate::finder::InteractiveFinderOpts;
use crate::note::NoteDir;
use crate::style::ColoredStyler;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the notebook directory
pub const NOTEBOOK_ENV: &str = "NOTEPICK_NOTEBOOK_DIR";

/// Colors used for picker rows
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Color of note titles
    #[serde(default = "default_title_color")]
    pub title: String,

    /// Color of note bodies
    #[serde(default = "default_body_color")]
    pub body: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: default_title_color(),
            body: default_body_color(),
        }
    }
}

impl ThemeConfig {
    /// Styler applying this theme
    #[must_use]
    pub fn styler(&self) -> ColoredStyler {
        ColoredStyler::new(self.title.clone(), self.body.clone())
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NotepickConfig {
    /// Notebook root; the current directory when unset
    #[serde(default)]
    pub notebook_dir: Option<PathBuf>,

    /// Open the picker even when a search matched nothing
    #[serde(default)]
    pub always_filter: bool,

    /// fzf executable
    #[serde(default = "default_fzf_command")]
    pub fzf_command: String,

    /// Directory, relative to the notebook, where the picker creates notes
    #[serde(default)]
    pub new_note_dir: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Row colors
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for NotepickConfig {
    fn default() -> Self {
        Self {
            notebook_dir: None,
            always_filter: false,
            fzf_command: default_fzf_command(),
            new_note_dir: None,
            quiet: false,
            theme: ThemeConfig::default(),
        }
    }
}

fn default_fzf_command() -> String {
    "fzf".to_string()
}

fn default_title_color() -> String {
    "yellow".to_string()
}

fn default_body_color() -> String {
    "bright black".to_string()
}

impl NotepickConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("notepick").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file or environment cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("NOTEPICK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Notebook root: `explicit` if given, then the configured directory,
    /// then the current directory
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be read.
    pub fn notebook_root(&self, explicit: Option<&Path>) -> std::io::Result<PathBuf> {
        match explicit.or(self.notebook_dir.as_deref()) {
            Some(dir) => Ok(dir.to_path_buf()),
            None => std::env::current_dir(),
        }
    }

    /// Options of the interactive finder. `new_note_dir` overrides the
    /// configured directory.
    #[must_use]
    pub fn finder_opts(&self, new_note_dir: Option<&str>) -> InteractiveFinderOpts {
        InteractiveFinderOpts {
            always_filter: self.always_filter,
            new_note_dir: new_note_dir
                .or(self.new_note_dir.as_deref())
                .map(NoteDir::new),
        }
    }
}
