use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DaycareConfig {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataSection {
    /// JSON dataset to load instead of the seed data
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DaycareConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daycare"));
        }
    }
    Ok(home_dir()?.join(".config").join("daycare"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
