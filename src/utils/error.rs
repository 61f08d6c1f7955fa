use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitWrapError {
    #[error("Git command failed ({command}): {message}")]
    ProcessExecution {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },

    #[error("Git binary not found: {binary}. Please install git: https://git-scm.com/downloads")]
    GitNotFound { binary: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitWrapError>;

impl GitWrapError {
    pub fn process_execution(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::ProcessExecution {
            command: command.into(),
            exit_code,
            message: message.into(),
        }
    }

    pub fn git_not_found(binary: impl Into<String>) -> Self {
        Self::GitNotFound {
            binary: binary.into(),
        }
    }

    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for failures raised while running git itself, as opposed to
    /// configuration or discovery problems around it.
    pub fn is_process_failure(&self) -> bool {
        matches!(self, Self::ProcessExecution { .. })
    }
}
