//! Logging setup.
//!
//! tracing-based logging with a configurable level, format (json, pretty,
//! compact) and output target (stdout, stderr or a file).

use crate::config::settings::LoggingConfig;
use crate::error::ConfigError;
use crate::Result;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system from configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| {
            // Cannot log here: the subscriber is not installed yet.
            eprintln!(
                "Warning: invalid log level '{}', falling back to 'info'",
                config.level
            );
            EnvFilter::new("info")
        })
    });

    match config.output.as_str() {
        "stdout" | "" => init_subscriber(&config.format, filter, std::io::stdout),
        "stderr" => init_subscriber(&config.format, filter, std::io::stderr),
        file_path => {
            let path = PathBuf::from(file_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Invalid(format!("failed to create log directory: {e}"))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    ConfigError::Invalid(format!("failed to open log file {file_path}: {e}"))
                })?;
            init_subscriber(&config.format, filter, file)
        }
    }
}

fn init_subscriber<W>(format: &str, filter: EnvFilter, writer: W) -> Result<()>
where
    W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = Registry::default().with(filter);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .with_writer(writer)
            .json()
            .with_target(true)
            .with_level(true)
            .boxed(),
        "pretty" | "human" => fmt::layer()
            .with_writer(writer)
            .pretty()
            .with_target(true)
            .with_level(true)
            .boxed(),
        _ => fmt::layer()
            .with_writer(writer)
            .compact()
            .with_target(true)
            .with_level(true)
            .boxed(),
    };

    registry
        .with(layer)
        .try_init()
        .map_err(|e| ConfigError::Invalid(format!("failed to initialize logging: {e}")).into())
}

/// Initialize logging with the default configuration (info level, compact
/// format, stdout).
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig {
        level: "info".to_string(),
        format: "compact".to_string(),
        output: "stdout".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        // The global subscriber can only be installed once per process;
        // later calls return an error instead of panicking.
        let _ = init_default_logging();
        let _ = init_default_logging();
    }
}
