pub mod branches;
pub mod command;
pub mod runner;
pub mod working_copy;

pub use branches::{
    is_empty_listing, normalize_branch, split_output_lines, BranchQuery, GitBranches,
};
pub use command::{GitCommand, Options};
pub use runner::CommandRunner;
pub use working_copy::WorkingCopy;
