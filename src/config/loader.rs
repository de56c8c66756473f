use crate::config::settings::Config;
use crate::error::ConfigError;
use crate::Result;
use config::{Config as ConfigBuilder, Environment, File};

/// Load configuration from a file, overlaid with `SHOWERFORGE_*`
/// environment variables.
pub fn load_from_file(path: &str) -> Result<Config> {
    let config = ConfigBuilder::builder()
        .add_source(File::with_name(path))
        .add_source(Environment::with_prefix("SHOWERFORGE"))
        .build()
        .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Invalid(e.to_string()).into())
}

/// Load configuration from environment variables only.
pub fn load_from_env() -> Result<Config> {
    let config = ConfigBuilder::builder()
        .add_source(Environment::with_prefix("SHOWERFORGE"))
        .build()
        .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Invalid(e.to_string()).into())
}
