//! Logger bootstrap for the notepick binary
//!
//! Diagnostics go to stderr so they never mix with list output or with the
//! picker protocol on stdout. The level comes from `NOTEPICK_LOG` when set,
//! otherwise from the number of `-v` flags.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

/// Environment variable holding a log specification, e.g. `debug`
pub const LOG_ENV: &str = "NOTEPICK_LOG";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Log level for a `-v` count
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr. Later calls are no-ops.
///
/// # Errors
///
/// Returns an error if the log specification is invalid or the logger
/// cannot be started.
pub fn init(verbosity: u8) -> Result<(), flexi_logger::FlexiLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = std::env::var(LOG_ENV)
        .unwrap_or_else(|_| level_for_verbosity(verbosity).to_string());
    let handle = Logger::try_with_str(spec)?.log_to_stderr().start()?;
    let _ = LOGGER.set(handle);
    Ok(())
}
