pub mod error;
pub mod git;

pub use error::{GitWrapError, Result};
pub use git::locate_git_binary;
