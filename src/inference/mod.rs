//! Inference backend trait and implementations.

pub mod backend;

pub mod backends;

// Re-export commonly used types
pub use backend::InferenceBackend;
