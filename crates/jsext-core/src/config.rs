use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/jsext/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsextConfig {
    /// URL prefixes defining the assessment scope. Empty means everything
    /// is in scope. CLI `--scope` flags override this list.
    #[serde(default)]
    pub scope_prefixes: Vec<String>,
    /// Default export destination when the CLI flag is omitted. The
    /// directory is not created automatically.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jsext")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JsextConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JsextConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: JsextConfig = toml::from_str(&data)?;
    Ok(cfg)
}
