//! Deterministic in-process backend.
//!
//! Loads nothing from disk: the schema is supplied at construction and
//! every declared output slot echoes the first input tensor. Used to
//! exercise dispatch and combination wiring without a serialized model.

use crate::error::{BackendError, Result};
use crate::inference::backend::InferenceBackend;
use crate::models::schema::ModelSchema;
use crate::models::tensor::TensorValue;
use std::path::{Path, PathBuf};

/// Backend that answers every prediction by echoing its first input.
#[derive(Debug, Clone)]
pub struct StubBackend {
    schema: ModelSchema,
}

/// Handle for a "loaded" stub model.
#[derive(Debug, Clone)]
pub struct StubModelHandle {
    /// Path the load was requested with, kept for diagnostics.
    pub path: PathBuf,
}

impl StubBackend {
    /// Create a stub backend that declares the given schema for every model
    /// it loads.
    pub fn new(schema: ModelSchema) -> Self {
        Self { schema }
    }
}

impl InferenceBackend for StubBackend {
    type ModelHandle = StubModelHandle;

    fn name(&self) -> &str {
        "stub"
    }

    fn load_model(&self, path: &Path) -> Result<(Self::ModelHandle, ModelSchema)> {
        Ok((
            StubModelHandle {
                path: path.to_path_buf(),
            },
            self.schema.clone(),
        ))
    }

    fn run(
        &self,
        _handle: &Self::ModelHandle,
        inputs: Vec<(String, TensorValue)>,
    ) -> Result<Vec<TensorValue>> {
        let first = inputs
            .into_iter()
            .next()
            .map(|(_, value)| value)
            .ok_or_else(|| BackendError::Unsupported("no input tensors".into()))?;
        Ok(vec![first; self.schema.n_outputs()])
    }
}
