use super::common::open_working_copy;
use crate::config::Config;
use crate::core::git::GitBranches;
use crate::utils::Result;
use std::path::Path;

pub fn execute(config: &Config, directory: &Path) -> Result<()> {
    let working_copy = open_working_copy(config, directory)?;
    let head = GitBranches::new(&working_copy).head()?;
    println!("{}", head);
    Ok(())
}
