use crate::config::toml_config::{LogFormat, LoggingConfig};
use crate::utils::error::{KataError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if let Some(directive) = level {
        return EnvFilter::new(directive);
    }

    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("small_katas=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("small_katas=info"))
    }
}

/// Installs the global subscriber described by `config`. A subscriber that is
/// already installed is reported as a `ConfigError`.
pub fn try_init_logger(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config.verbose.unwrap_or(false), config.level.as_deref());
    let registry = tracing_subscriber::registry().with(filter);

    let outcome = match config.format.unwrap_or_default() {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    outcome.map_err(|e| KataError::ConfigError {
        message: format!("Failed to install logger: {}", e),
    })
}
