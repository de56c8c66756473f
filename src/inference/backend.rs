//! Inference backend abstraction.
//!
//! The execution engine is opaque to the rest of the crate: it loads a
//! serialized model, declares the model's schema, and runs validated
//! inputs. Everything above this trait is backend-agnostic.

use crate::error::Result;
use crate::models::schema::ModelSchema;
use crate::models::tensor::TensorValue;
use std::path::Path;

/// An opaque model execution engine.
///
/// Implementations are synchronous: every call blocks until the engine
/// returns. Handles are read-only after load and reusable across sequential
/// calls. Concurrent calls against one handle are not guaranteed safe by
/// this contract; callers needing parallelism must serialize access per
/// model or hold one handle per worker.
pub trait InferenceBackend: Send + Sync {
    /// Backend-specific handle for one loaded model.
    type ModelHandle: Send + Sync;

    /// Backend name, for logs and diagnostics.
    fn name(&self) -> &str;

    /// Load a serialized model and read out its declared schema.
    ///
    /// Fails with [`ModelError::LoadFailed`](crate::error::ModelError) if
    /// the engine cannot open or parse the file.
    fn load_model(&self, path: &Path) -> Result<(Self::ModelHandle, ModelSchema)>;

    /// Execute the model on validated inputs.
    ///
    /// `inputs` arrive already checked against the schema, narrowed to
    /// backend-supported dtypes, and ordered to the schema's declared input
    /// order, one `(slot name, tensor)` pair per slot. Returns one tensor
    /// per declared output slot, in declared order.
    fn run(
        &self,
        handle: &Self::ModelHandle,
        inputs: Vec<(String, TensorValue)>,
    ) -> Result<Vec<TensorValue>>;
}
