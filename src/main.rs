use anyhow::Context;
use clap::Parser;
use gitwrap::cli::{execute_command, Cli};
use gitwrap::logging::init_logging;
use gitwrap::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("gitwrap: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_create().context("Failed to load config")?;
    init_logging(&config.logging)?;
    execute_command(cli, config)?;
    Ok(())
}
