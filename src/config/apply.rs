use std::time::Duration;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::CliArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_default(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::DefaultValue)
}

/// Applies config file values onto the parsed args. A field is only
/// replaced when the CLI left it at its built-in default, so explicit
/// command-line and environment values win over the file.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(args: &mut CliArgs, matches: &ArgMatches, config: ConfigFile) -> AppResult<()> {
    if let Some(host) = config.host
        && is_default(matches, "host")
    {
        args.host = host;
    }
    if let Some(port) = config.port
        && is_default(matches, "port")
    {
        args.port = port;
    }
    if let Some(path) = config.path
        && is_default(matches, "path")
    {
        args.path = path;
    }
    if let Some(count) = config.count
        && is_default(matches, "count")
    {
        args.count = if count == 0 { 1 } else { count };
    }
    if let Some(timeout_ms) = config.timeout_ms
        && is_default(matches, "timeout")
    {
        if timeout_ms == 0 {
            return Err(AppError::config(ConfigError::FieldMustBePositive {
                field: "timeout_ms".to_owned(),
            }));
        }
        args.timeout = Duration::from_millis(timeout_ms);
    }
    Ok(())
}
