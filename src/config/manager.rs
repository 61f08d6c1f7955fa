use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct ConfigManager;

impl ConfigManager {
    pub fn get_config_path() -> Result<String> {
        let config_path = get_config_file_path();
        Ok(config_path.to_string_lossy().to_string())
    }

    pub fn load_or_create() -> Result<Config> {
        Self::load_or_create_with_path(None)
    }

    pub fn load_or_create_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            debug!(path = %config_path.display(), "writing default config");
            let config = default_config();
            Self::save_to_path(&config, &config_path)?;
            Ok(config)
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}
