use crate::config::LoggingConfig;
use crate::utils::{GitWrapError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("gitwrap={}", config.level.to_lowercase())
}

/// Initialize logging to stderr so log lines never mix with command output.
///
/// `RUST_LOG` overrides the configured level when present.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(config)))
        .map_err(|e| GitWrapError::config_error(format!("Invalid log filter: {}", e)))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| GitWrapError::config_error(format!("Failed to initialize logging: {}", e)))
}
