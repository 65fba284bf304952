use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filename checked when no `--config` path is provided.
const DEFAULT_CONFIG_FILE: &str = "volley.toml";

/// Loads a configuration file from the provided path or the default
/// location.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        let path = PathBuf::from(path);
        return Ok(Some(load_config_file(&path)?));
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Ok(Some(load_config_file(&default_path)?));
    }

    Ok(None)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    toml::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })
    })
}
