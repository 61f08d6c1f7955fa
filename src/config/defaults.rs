use super::{Config, GitConfig, LoggingConfig};
use std::collections::BTreeMap;

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        logging: default_logging_config(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        binary: default_git_binary(),
        env: BTreeMap::new(),
    }
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
    }
}

pub fn default_git_binary() -> String {
    "git".to_string()
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "gitwrap") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("gitwrap")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("GITWRAP_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
