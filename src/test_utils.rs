use crate::core::git::{CommandRunner, GitCommand};
use crate::utils::{GitWrapError, Result};

pub mod test_helpers {
    use crate::core::git::WorkingCopy;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn setup_test_repo() -> (TempDir, WorkingCopy) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        Command::new("git")
            .current_dir(repo_path)
            .args(["init", "--initial-branch=main"])
            .status()
            .expect("Failed to init git repo");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.name", "Test User"])
            .status()
            .expect("Failed to set git user name");

        Command::new("git")
            .current_dir(repo_path)
            .args(["config", "user.email", "test@example.com"])
            .status()
            .expect("Failed to set git user email");

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["add", "README.md"])
            .status()
            .expect("Failed to add README");

        Command::new("git")
            .current_dir(repo_path)
            .args(["commit", "-m", "Initial commit"])
            .status()
            .expect("Failed to commit README");

        let working_copy = WorkingCopy::new("git", repo_path).with_env("GIT_PAGER", "cat");
        (temp_dir, working_copy)
    }
}

/// Runner that records every command and answers with canned output.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    response: String,
    failure: Option<(i32, String)>,
    output: String,
    commands: Vec<GitCommand>,
    clear_count: usize,
}

impl RecordingRunner {
    pub fn with_output(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Self::default()
        }
    }

    pub fn failing(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            failure: Some((exit_code, stderr.into())),
            ..Self::default()
        }
    }

    pub fn set_output(&mut self, response: impl Into<String>) {
        self.response = response.into();
    }

    pub fn commands(&self) -> &[GitCommand] {
        &self.commands
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl CommandRunner for RecordingRunner {
    fn clear_output(&mut self) {
        self.clear_count += 1;
        self.output.clear();
    }

    fn run(&mut self, command: &GitCommand) -> Result<String> {
        self.commands.push(command.clone());

        if let Some((exit_code, stderr)) = &self.failure {
            return Err(GitWrapError::process_execution(
                command.to_string(),
                Some(*exit_code),
                stderr.clone(),
            ));
        }

        self.output.push_str(&self.response);
        Ok(self.output.clone())
    }
}
