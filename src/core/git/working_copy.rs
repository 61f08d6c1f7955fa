use super::command::GitCommand;
use super::runner::CommandRunner;
use crate::config::GitConfig;
use crate::utils::{GitWrapError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// A local checkout plus everything needed to run git against it.
///
/// Cloning yields an independent copy: the clone has its own output buffer
/// and environment, so later changes to the original do not leak into it.
#[derive(Debug, Clone)]
pub struct WorkingCopy {
    binary: PathBuf,
    directory: PathBuf,
    env: BTreeMap<String, String>,
    output: String,
}

impl WorkingCopy {
    pub fn new(binary: impl Into<PathBuf>, directory: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            directory: directory.into(),
            env: BTreeMap::new(),
            output: String::new(),
        }
    }

    /// Builds a working copy for `directory` using the configured binary and
    /// environment. The directory must exist.
    pub fn open(config: &GitConfig, directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(GitWrapError::directory_not_found(
                directory.to_string_lossy(),
            ));
        }

        let mut working_copy = Self::new(&config.binary, directory);
        working_copy.env = config.env.clone();
        Ok(working_copy)
    }

    /// Replaces the binary, keeping directory and environment.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl CommandRunner for WorkingCopy {
    fn clear_output(&mut self) {
        self.output.clear();
    }

    fn run(&mut self, command: &GitCommand) -> Result<String> {
        debug!(
            command = %command,
            directory = %self.directory.display(),
            "running git"
        );

        let output = Command::new(&self.binary)
            .current_dir(&self.directory)
            .envs(&self.env)
            .args(command.to_args())
            .output()
            .map_err(|e| {
                GitWrapError::process_execution(
                    command.to_string(),
                    None,
                    format!("Failed to execute git: {}", e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(command = %command, code = ?output.status.code(), "git exited with failure");
            return Err(GitWrapError::process_execution(
                command.to_string(),
                output.status.code(),
                stderr.trim(),
            ));
        }

        self.output.push_str(&String::from_utf8_lossy(&output.stdout));
        Ok(self.output.clone())
    }
}
