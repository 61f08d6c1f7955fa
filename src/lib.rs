pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use core::git::{
    is_empty_listing, normalize_branch, BranchQuery, CommandRunner, GitBranches, GitCommand,
    Options, WorkingCopy,
};
pub use utils::{GitWrapError, Result};
