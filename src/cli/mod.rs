pub mod commands;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::config::Config;
use crate::utils::Result;
use std::path::PathBuf;

pub fn execute_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Branches(args) => {
            let directory = resolve_directory(cli.directory)?;
            commands::branches::execute(&config, &directory, args)
        }
        Commands::Head => {
            let directory = resolve_directory(cli.directory)?;
            commands::head::execute(&config, &directory)
        }
        Commands::Config(args) => commands::config::execute(&config, args),
    }
}

fn resolve_directory(directory: Option<PathBuf>) -> Result<PathBuf> {
    match directory {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
