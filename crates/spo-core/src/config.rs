use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loaded from `~/.config/spo-core/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoConfig {
    /// Host suffixes trusted when a full URL is nested inside another site's
    /// path identity (e.g. `sharepoint.us` for GCC High tenants).
    #[serde(default = "default_nested_host_suffixes")]
    pub nested_host_suffixes: Vec<String>,
}

fn default_nested_host_suffixes() -> Vec<String> {
    vec!["sharepoint.com".to_string()]
}

impl Default for SpoConfig {
    fn default() -> Self {
        Self {
            nested_host_suffixes: default_nested_host_suffixes(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spo-core")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SpoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SpoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SpoConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SpoConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
