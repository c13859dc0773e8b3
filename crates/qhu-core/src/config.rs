use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::image_url::ImageRoot;

/// Global configuration loaded from `~/.config/qhu/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QhuConfig {
    /// Header script read by `rewrite`/`check` when `--input` is not given.
    pub input_filename: String,
    /// Updated header written by `rewrite` when `--output` is not given.
    pub output_filename: String,
    /// Directory holding the header scripts; None = current directory.
    #[serde(default)]
    pub header_dir: Option<PathBuf>,
    /// Optional images-root override (fork or branch); if missing, the
    /// built-in Social_Decision_Making_Tasks root is used.
    #[serde(default)]
    pub image_root: Option<ImageRoot>,
}

impl Default for QhuConfig {
    fn default() -> Self {
        Self {
            input_filename: "QualtricsHeader.js".to_string(),
            output_filename: "QualtricsHeaderUpdated.js".to_string(),
            header_dir: None,
            image_root: None,
        }
    }
}

impl QhuConfig {
    /// Images root to rewrite against: the configured override, validated,
    /// or the built-in default.
    pub fn resolved_image_root(&self) -> Result<ImageRoot> {
        match &self.image_root {
            Some(root) => {
                root.validate()?;
                Ok(root.clone())
            }
            None => Ok(ImageRoot::default()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qhu")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QhuConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QhuConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: QhuConfig = toml::from_str(&data)?;
    Ok(cfg)
}
