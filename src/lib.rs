//! ShowerForge - camera-aware deep-learning event reconstruction for
//! imaging telescope arrays.
//!
//! An array observes one atmospheric-shower event with telescopes of
//! heterogeneous camera designs. Each camera type has its own trained
//! model; ShowerForge routes every telescope's observation to the matching
//! model, runs the models through an opaque inference backend, and folds
//! the per-camera outputs into a single reconstructed shower result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod containers;
pub mod core;
pub mod error;
pub mod inference;
pub mod models;
pub mod subarray;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::containers::ReconstructedResult;
pub use crate::core::{PredictionBatch, Reconstructor, ResultCombiner};
pub use crate::error::{Result, ShowerForgeError};
pub use crate::models::{InferenceModel, TelescopeInput, TensorValue};
pub use crate::subarray::{ArrayLayout, CameraType, SubarrayLayout, TelescopeId};

/// ShowerForge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
