use super::{Config, ConfigError, GitConfig, LoggingConfig, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

pub fn validate_config(config: &Config) -> Result<()> {
    validate_git_config(&config.git)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

pub fn validate_git_config(git: &GitConfig) -> Result<()> {
    if git.binary.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Git binary cannot be empty".to_string(),
        ));
    }

    for key in git.env.keys() {
        if key.is_empty() || key.contains('=') {
            return Err(ConfigError::Validation(format!(
                "Invalid environment variable name '{}'",
                key
            )));
        }
    }

    Ok(())
}

pub fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    let level = logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation(format!(
            "Invalid log level '{}'. Must be one of: {}",
            logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
