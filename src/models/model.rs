//! Loaded model wrapper with strict call validation.

use crate::error::{PredictError, Result};
use crate::inference::backend::InferenceBackend;
use crate::models::input::TelescopeInput;
use crate::models::schema::ModelSchema;
use crate::models::tensor::TensorValue;
use std::path::Path;
use std::sync::Arc;

/// One loaded model: a backend handle plus the schema the model declares.
///
/// Created once when the owning reconstructor is built, never mutated after
/// load, and released when the reconstructor is dropped. Stateless across
/// [`predict`](Self::predict) calls.
pub struct InferenceModel<B: InferenceBackend> {
    backend: Arc<B>,
    handle: B::ModelHandle,
    schema: ModelSchema,
}

impl<B: InferenceBackend> InferenceModel<B> {
    /// Load a serialized model through the given backend.
    pub fn load(backend: Arc<B>, path: &Path) -> Result<Self> {
        let (handle, schema) = backend.load_model(path)?;
        Ok(Self {
            backend,
            handle,
            schema,
        })
    }

    /// The schema the loaded model declares.
    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    /// Run one prediction.
    ///
    /// Validates the input against the declared schema before the backend
    /// is invoked:
    /// - the input must supply at least one tensor
    ///   ([`PredictError::InvalidArgumentUsage`]);
    /// - the tensor count must equal the declared input-slot count
    ///   ([`PredictError::ArityMismatch`]);
    /// - named tensors must address declared slots
    ///   ([`PredictError::UnknownInput`]);
    /// - all tensors must share one leading length
    ///   ([`PredictError::BatchSizeMismatch`]).
    ///
    /// Positional tensors are mapped onto the schema's input names in
    /// declared order; named tensors are reordered to that order. `f64`
    /// tensors are silently narrowed to `f32`. Returns one raw output
    /// tensor per declared output slot.
    pub fn predict(&self, input: &TelescopeInput) -> Result<Vec<TensorValue>> {
        let bound = self.bind_inputs(input)?;
        self.check_batch_lengths(&bound)?;
        let narrowed = bound
            .into_iter()
            .map(|(name, value)| (name, value.narrowed()))
            .collect();
        self.backend.run(&self.handle, narrowed)
    }

    /// Resolve the call convention and pair every tensor with its schema
    /// slot name, in declared order.
    fn bind_inputs(&self, input: &TelescopeInput) -> Result<Vec<(String, TensorValue)>> {
        let expected = self.schema.n_inputs();
        let given = input.arity();
        if given == 0 {
            return Err(PredictError::InvalidArgumentUsage(
                "at least one input tensor must be supplied".into(),
            )
            .into());
        }
        if given != expected {
            return Err(PredictError::ArityMismatch { given, expected }.into());
        }
        match input {
            TelescopeInput::Single(value) => {
                let name = self.schema.inputs[0].name.clone();
                Ok(vec![(name, value.clone())])
            }
            TelescopeInput::Positional(values) => Ok(self
                .schema
                .input_names()
                .zip(values.iter())
                .map(|(name, value)| (name.to_owned(), value.clone()))
                .collect()),
            TelescopeInput::Named(values) => {
                for name in values.keys() {
                    if self.schema.input_position(name).is_none() {
                        return Err(PredictError::UnknownInput(name.clone()).into());
                    }
                }
                // Arity and membership both hold, so every slot is covered.
                Ok(self
                    .schema
                    .input_names()
                    .map(|name| (name.to_owned(), values[name].clone()))
                    .collect())
            }
        }
    }

    fn check_batch_lengths(&self, bound: &[(String, TensorValue)]) -> Result<()> {
        let lengths: Vec<usize> = bound.iter().map(|(_, value)| value.batch_len()).collect();
        if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
            return Err(PredictError::BatchSizeMismatch(lengths).into());
        }
        Ok(())
    }
}
