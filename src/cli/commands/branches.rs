use super::common::open_working_copy;
use crate::cli::parser::BranchesArgs;
use crate::config::Config;
use crate::core::git::{is_empty_listing, BranchQuery, GitBranches};
use crate::utils::Result;
use std::path::Path;
use tracing::info;

pub fn execute(config: &Config, directory: &Path, args: BranchesArgs) -> Result<()> {
    let branches = list(config, directory, args.query())?;
    for branch in branches {
        println!("{}", branch);
    }
    Ok(())
}

/// Branch names for `query`, with the empty-output placeholder removed.
pub fn list(config: &Config, directory: &Path, query: BranchQuery) -> Result<Vec<String>> {
    let working_copy = open_working_copy(config, directory)?;
    let mut lister = GitBranches::new(&working_copy);

    let branches = lister.fetch(query)?;
    info!(?query, count = branches.len(), "listed branches");

    if is_empty_listing(&branches) {
        return Ok(Vec::new());
    }
    Ok(branches)
}
