//! Tracing subscriber setup for the command-line tool

use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use crate::io::error::{Result, invalid_parameter};

/// Parse a level name such as `warn` or `debug`
///
/// # Errors
///
/// Returns an error if the name is not a recognised tracing level
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|e| {
        invalid_parameter(
            "log_level",
            &level,
            &format!("{e}; expected off, error, warn, info, debug or trace"),
        )
    })
}

/// Install a stderr formatter at the given level
///
/// Returns `false` and keeps the existing subscriber if a global one is
/// already installed.
pub fn init(level: LevelFilter) -> bool {
    match tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "tracing subscriber already installed");
            false
        }
    }
}
