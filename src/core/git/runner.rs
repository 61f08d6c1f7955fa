use super::command::{GitCommand, Options};
use crate::utils::Result;

/// Something that can run git commands and hand back their text output.
///
/// Output is buffered: every successful `run` appends to it and returns the
/// whole buffer, so callers that want the output of a single command clear
/// it first.
pub trait CommandRunner {
    fn clear_output(&mut self);

    fn run(&mut self, command: &GitCommand) -> Result<String>;

    fn branch(&mut self, options: Options) -> Result<String> {
        self.run(&GitCommand::new("branch").with_options(options))
    }
}
