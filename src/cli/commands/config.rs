use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{Config, ConfigManager};
use crate::utils::{GitWrapError, Result};

pub fn execute(config: &Config, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => execute_show(config),
        ConfigCommands::Path => execute_path(),
    }
}

fn execute_show(config: &Config) -> Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

fn execute_path() -> Result<()> {
    let config_path = ConfigManager::get_config_path()
        .map_err(|e| GitWrapError::config_error(format!("Failed to get config path: {}", e)))?;
    println!("{}", config_path);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
