use crate::core::git::BranchQuery;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gitwrap")]
#[command(about = "List git branches through the git command line")]
#[command(version)]
pub struct Cli {
    /// Run as if gitwrap was started in this directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List branches, one per line (local branches by default)
    #[command(alias = "br")]
    Branches(BranchesArgs),
    /// Print the currently checked out branch
    Head,
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// List local and remote-tracking branches
    #[arg(short, long, conflicts_with = "remote")]
    pub all: bool,

    /// List only remote-tracking branches
    #[arg(short, long)]
    pub remote: bool,
}

impl BranchesArgs {
    pub fn query(&self) -> BranchQuery {
        if self.all {
            BranchQuery::All
        } else if self.remote {
            BranchQuery::RemoteOnly
        } else {
            BranchQuery::LocalOnly
        }
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as JSON
    Show,
    /// Print the configuration file path
    Path,
}
