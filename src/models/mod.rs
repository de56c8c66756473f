//! Model-side types: tensors, schemas, per-telescope inputs, and the loaded
//! model wrapper.

pub mod input;
pub mod model;
pub mod schema;
pub mod tensor;

// Re-export commonly used types
pub use input::TelescopeInput;
pub use model::InferenceModel;
pub use schema::{ModelSchema, SchemaSlot};
pub use tensor::{TensorDtype, TensorValue};
