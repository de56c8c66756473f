//! Concrete backend implementations.

#[cfg(feature = "onnx")]
pub mod onnx;

pub mod stub;

// Re-export commonly used types
#[cfg(feature = "onnx")]
pub use onnx::{OnnxBackend, OnnxModelHandle};
pub use stub::{StubBackend, StubModelHandle};
