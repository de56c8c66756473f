use crate::subarray::CameraType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level crate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Configured models.
    pub models: ModelsConfig,
    /// Inference engine settings.
    pub inference: InferenceConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Camera-type to serialized-model mapping.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Camera name keyed model file paths.
    pub paths: HashMap<String, PathBuf>,
}

impl ModelsConfig {
    /// The mapping with typed camera keys, as consumed by the
    /// reconstructor.
    pub fn camera_paths(&self) -> HashMap<CameraType, PathBuf> {
        self.paths
            .iter()
            .map(|(cam, path)| (CameraType::new(cam.clone()), path.clone()))
            .collect()
    }
}

/// Inference engine settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    /// Backend to load models with.
    pub backend: String,
    /// Thread count hint for CPU execution; `None` lets the backend decide.
    pub threads: Option<usize>,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter ("trace" .. "error").
    pub level: String,
    /// Output format: "json", "pretty" or "compact".
    pub format: String,
    /// Output target: "stdout", "stderr" or a file path.
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        use crate::config::defaults;
        Self {
            models: ModelsConfig::default(),
            inference: InferenceConfig {
                backend: defaults::DEFAULT_BACKEND.to_string(),
                threads: None,
            },
            logging: LoggingConfig {
                level: defaults::DEFAULT_LOG_LEVEL.to_string(),
                format: defaults::DEFAULT_LOG_FORMAT.to_string(),
                output: defaults::DEFAULT_LOG_OUTPUT.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from a file, with `SHOWERFORGE_*` environment
    /// overrides.
    pub fn from_file(path: &str) -> crate::Result<Self> {
        crate::config::loader::load_from_file(path)
    }

    /// Load configuration from environment variables only.
    pub fn from_env() -> crate::Result<Self> {
        crate::config::loader::load_from_env()
    }
}
