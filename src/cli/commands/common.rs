use crate::config::Config;
use crate::core::git::WorkingCopy;
use crate::utils::{locate_git_binary, Result};
use std::path::Path;

/// Open a working copy for `directory`, resolving the configured git binary
/// up front so a missing install is reported before anything runs.
pub fn open_working_copy(config: &Config, directory: &Path) -> Result<WorkingCopy> {
    let binary = locate_git_binary(config.git_binary())?;
    Ok(WorkingCopy::open(&config.git, directory)?.with_binary(binary))
}
