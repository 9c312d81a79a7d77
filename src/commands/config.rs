//! Config command - inspect the configuration

use crate::{NotepickError, cli::ConfigCommands, config::NotepickConfig};

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `NotepickError` if the config path cannot be determined or the
/// configuration cannot be rendered.
pub fn execute(config: &NotepickConfig, command: ConfigCommands) -> Result<(), NotepickError> {
    match command {
        ConfigCommands::Path => println!("{}", NotepickConfig::config_path()?.display()),
        ConfigCommands::Show => print!("{}", config.to_toml()?),
    }
    Ok(())
}
