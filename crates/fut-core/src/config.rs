use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_base_url() -> String {
    "https://translate.wordpress.org".to_string()
}

fn default_branch() -> String {
    "dev".to_string()
}

/// Global configuration loaded from `~/.config/fut/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutConfig {
    /// Base URL of the GlotPress instance.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Project branch to export from: `dev` (trunk) or `stable`.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Languages directory for stored files; when unset the CLI falls back
    /// to `--dir` or the current working directory.
    #[serde(default)]
    pub languages_dir: Option<PathBuf>,
}

impl Default for FutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            branch: default_branch(),
            languages_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fut")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FutConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FutConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FutConfig = toml::from_str(&data)?;
    Ok(cfg)
}
