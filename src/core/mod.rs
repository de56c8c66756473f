//! Registry, dispatch, combination and orchestration.

pub mod combine;
pub mod dispatch;
pub mod reconstructor;
pub mod registry;

// Re-export commonly used types
pub use combine::ResultCombiner;
pub use dispatch::{CameraDispatcher, ModelOutputs, PredictionBatch};
pub use reconstructor::Reconstructor;
pub use registry::ModelRegistry;
