//! Application settings resolved from the environment.
//!
//! The only setting today is where the seed configuration lives. `PANTRY_CONFIG` may
//! point at a TOML file; without it the app looks for `./config.toml` and falls back to
//! the default configuration when that file does not exist.

use std::{
    env::VarError,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    config::foods::{self, Config},
    errors::Result,
};

/// Environment variable naming the seed configuration file.
pub const CONFIG_PATH_VAR: &str = "PANTRY_CONFIG";

/// Used when `PANTRY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Where the configuration should be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named explicitly; the file must exist
    Explicit(PathBuf),
    /// The default location; a missing file means default settings
    Default(PathBuf),
}

impl ConfigSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

/// Resolves the configuration source from the value of `PANTRY_CONFIG`, if any.
///
/// An empty or whitespace-only value counts as unset.
#[must_use]
pub fn resolve_config_source(value: Option<String>) -> ConfigSource {
    match value {
        Some(path) if !path.trim().is_empty() => ConfigSource::Explicit(PathBuf::from(path.trim())),
        _ => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

/// Treats an unset variable as absent; a value that is not valid Unicode is an error.
fn optional_var(value: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Gets the configuration source from the environment.
///
/// # Errors
/// Returns `Error::EnvVar` if `PANTRY_CONFIG` is set to a non-Unicode value.
pub fn get_config_source() -> Result<ConfigSource> {
    optional_var(std::env::var(CONFIG_PATH_VAR)).map(resolve_config_source)
}

/// Loads the configuration from `source`.
///
/// # Errors
/// Returns `Error::Config` if an explicitly named file is missing, or if any file that
/// exists cannot be read or parsed.
pub fn load_from_source(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default(path) if !path.exists() => {
            warn!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        _ => {
            let config = foods::load_config(source.path())?;
            info!(
                "Loaded configuration from {} ({} seed foods)",
                source.path().display(),
                config.foods.len()
            );
            Ok(config)
        }
    }
}

/// Loads the main application configuration, resolving its location from the environment.
///
/// # Errors
/// See [`get_config_source`] and [`load_from_source`].
pub fn load_app_configuration() -> Result<Config> {
    load_from_source(&get_config_source()?)
}
