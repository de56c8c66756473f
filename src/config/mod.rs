//! Configuration: settings structs, file/env loader, defaults.

pub mod defaults;
pub mod loader;
pub mod settings;

// Re-export commonly used types
pub use settings::{Config, InferenceConfig, LoggingConfig, ModelsConfig};
