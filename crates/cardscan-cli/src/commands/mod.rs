//! CLI commands.

pub mod batch;
pub mod config;
pub mod output;
pub mod parse;

use std::path::{Path, PathBuf};

use tracing::debug;

use cardscan_core::CardscanConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardscan")
        .join("config.json")
}

/// Config file to use: the `--config` path, or the default location.
pub fn config_file(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration.
///
/// An explicit `--config` file must exist. Without one, the default file is
/// used if present, otherwise the built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardscanConfig> {
    if let Some(path) = config_path {
        if !Path::new(path).exists() {
            anyhow::bail!("Config file not found: {}", path);
        }
        return Ok(CardscanConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(CardscanConfig::from_file(&default_path)?)
    } else {
        Ok(CardscanConfig::default())
    }
}
