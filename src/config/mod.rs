use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitConfig {
    /// Name looked up on `PATH`, or an explicit path to the git binary.
    #[serde(default = "defaults::default_git_binary")]
    pub binary: String,
    /// Extra environment variables set on every git invocation.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        defaults::default_git_config()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        ConfigManager::load_or_create()
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn git_binary(&self) -> &str {
        &self.git.binary
    }
}
