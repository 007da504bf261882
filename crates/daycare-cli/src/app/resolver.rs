//! Path resolution for config and dataset files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, DaycareConfig};
use crate::errors::CliError;

/// Where the config path came from; only an explicit path must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

/// Resolve the config file path: `--config` / `DAYCARE_CONFIG` first, then
/// the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigSource> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(value)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}

/// Resolve the dataset path from CLI args or config. `None` means the
/// built-in seed data.
pub fn resolve_data_path(cli: &Cli, config: &DaycareConfig) -> anyhow::Result<Option<PathBuf>> {
    let candidate = cli
        .data
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or(config.data.path.as_deref());

    let Some(value) = candidate else {
        return Ok(None);
    };

    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(CliError::not_found(
            missing_data_message(&path),
            "Pass --data with an existing JSON file, or remove [data].path from the config.",
        )
        .into());
    }
    Ok(Some(path))
}

/// Error message when the dataset file is missing.
pub fn missing_data_message(path: &Path) -> String {
    format!("No dataset found at {}", path.display())
}

/// Error message when an explicitly requested config file is missing.
pub fn missing_config_message(path: &Path) -> String {
    format!("No config found at {}", path.display())
}
