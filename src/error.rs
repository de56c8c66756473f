//! Error taxonomy.
//!
//! Construction-time failures (model loading, camera configuration) and
//! per-call failures (predict contract, dispatch, backend execution) are
//! kept in separate enums and folded under one umbrella type.

use crate::subarray::TelescopeId;
use std::path::PathBuf;
use thiserror::Error;

/// ShowerForge error type
#[derive(Debug, Error)]
pub enum ShowerForgeError {
    /// Model loading failed.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// A `predict` call violated the model's input contract.
    #[error("Predict error: {0}")]
    Predict(#[from] PredictError),

    /// Configuration is invalid or cannot be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Event routing failed.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The inference backend failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Model lifecycle errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// The backend could not open or parse the serialized model.
    #[error("model could not be loaded from {path:?}: {reason}")]
    LoadFailed {
        /// Locator the load was attempted from.
        path: PathBuf,
        /// Backend-reported reason.
        reason: String,
    },
}

/// Per-call predict contract errors
#[derive(Debug, Error)]
pub enum PredictError {
    /// No input tensors were supplied.
    #[error("invalid argument usage: {0}")]
    InvalidArgumentUsage(String),

    /// The number of supplied inputs does not match the declared schema.
    #[error("argument count mismatch: got {given}, model declares {expected} inputs")]
    ArityMismatch {
        /// Number of inputs supplied by the caller.
        given: usize,
        /// Number of input slots the model declares.
        expected: usize,
    },

    /// Supplied inputs disagree on their leading (batch) length.
    #[error("all inputs must have the same leading length, got {0:?}")]
    BatchSizeMismatch(Vec<usize>),

    /// A named input does not match any declared input slot.
    #[error("model declares no input named {0:?}")]
    UnknownInput(String),
}

/// Event dispatch errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A telescope id could not be resolved to a camera type.
    #[error("telescope {0} is not part of the array layout")]
    UnknownTelescope(TelescopeId),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configured camera types the reconstructor variant cannot combine.
    #[error("camera types not supported by this reconstructor: {}", .0.join(", "))]
    UnsupportedCameras(Vec<String>),

    /// The configuration source could not be read.
    #[error("failed to load config: {0}")]
    LoadFailed(String),

    /// The configuration was read but is not valid.
    #[error("invalid config: {0}")]
    Invalid(String),

    /// A configured model file does not exist.
    #[error("model file not found: {0}")]
    ModelFileNotFound(String),
}

/// Inference backend errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend cannot execute the given input.
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// Execution of a loaded model failed.
    #[error("inference execution failed: {0}")]
    Execution(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ShowerForgeError>;
