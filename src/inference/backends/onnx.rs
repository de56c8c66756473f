//! ONNX backend backed by tract.
//!
//! The schema is read from the model graph before optimization, then the
//! graph is optimized into a runnable plan. Input names survive in the
//! schema even though the plan itself runs positionally.

use crate::error::{BackendError, ModelError, Result};
use crate::inference::backend::InferenceBackend;
use crate::models::schema::{ModelSchema, SchemaSlot};
use crate::models::tensor::TensorValue;
use ndarray::{ArrayD, IxDyn};
use std::path::Path;
use tract_onnx::prelude::*;
use tract_onnx::tract_hir::infer::Factoid;
use tract_onnx::tract_hir::internal::DimLike;

/// ONNX model execution engine.
#[derive(Debug, Clone, Default)]
pub struct OnnxBackend;

/// One optimized, runnable ONNX plan.
#[derive(Debug)]
pub struct OnnxModelHandle {
    plan: TypedRunnableModel<TypedModel>,
}

impl OnnxBackend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }
}

impl InferenceBackend for OnnxBackend {
    type ModelHandle = OnnxModelHandle;

    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, path: &Path) -> Result<(Self::ModelHandle, ModelSchema)> {
        let load_failed = |reason: String| ModelError::LoadFailed {
            path: path.to_path_buf(),
            reason,
        };

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(|e| load_failed(e.to_string()))?;
        let schema = read_schema(&model).map_err(|e| load_failed(e.to_string()))?;
        let plan = model
            .into_optimized()
            .and_then(|typed| typed.into_runnable())
            .map_err(|e| load_failed(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            inputs = schema.n_inputs(),
            outputs = schema.n_outputs(),
            "loaded ONNX model"
        );
        Ok((OnnxModelHandle { plan }, schema))
    }

    fn run(
        &self,
        handle: &Self::ModelHandle,
        inputs: Vec<(String, TensorValue)>,
    ) -> Result<Vec<TensorValue>> {
        let mut tensors: TVec<TValue> = tvec!();
        for (_, value) in inputs {
            tensors.push(to_tract(value)?.into());
        }
        let outputs = handle
            .plan
            .run(tensors)
            .map_err(|e| BackendError::Execution(e.to_string()))?;
        outputs.iter().map(|t| from_tract(t)).collect()
    }
}

fn read_schema(
    model: &tract_onnx::prelude::InferenceModel,
) -> TractResult<ModelSchema> {
    let mut inputs = Vec::new();
    for (ix, outlet) in model.input_outlets()?.iter().enumerate() {
        let name = model.node(outlet.node).name.clone();
        inputs.push(SchemaSlot::with_shape(name, fact_shape(model.input_fact(ix)?)));
    }
    let mut outputs = Vec::new();
    for (ix, outlet) in model.output_outlets()?.iter().enumerate() {
        let name = model.node(outlet.node).name.clone();
        outputs.push(SchemaSlot::with_shape(name, fact_shape(model.output_fact(ix)?)));
    }
    Ok(ModelSchema::new(inputs, outputs))
}

fn fact_shape(fact: &InferenceFact) -> Vec<Option<usize>> {
    fact.shape
        .dims()
        .map(|dim| dim.concretize().and_then(|d| d.to_usize().ok()))
        .collect()
}

fn to_tract(value: TensorValue) -> Result<Tensor> {
    let conversion = |e: TractError| BackendError::Unsupported(e.to_string());
    match value {
        TensorValue::F32(a) => {
            let shape = a.shape().to_vec();
            let data: Vec<f32> = a.into_iter().collect();
            Tensor::from_shape(&shape, &data).map_err(|e| conversion(e).into())
        }
        TensorValue::F64(a) => {
            // Inputs are narrowed before they reach the backend, but the
            // engine itself accepts f64 graphs.
            let shape = a.shape().to_vec();
            let data: Vec<f64> = a.into_iter().collect();
            Tensor::from_shape(&shape, &data).map_err(|e| conversion(e).into())
        }
        TensorValue::I64(a) => {
            let shape = a.shape().to_vec();
            let data: Vec<i64> = a.into_iter().collect();
            Tensor::from_shape(&shape, &data).map_err(|e| conversion(e).into())
        }
    }
}

fn from_tract(tensor: &Tensor) -> Result<TensorValue> {
    let shape = IxDyn(tensor.shape());
    let execution = |e: TractError| BackendError::Execution(e.to_string());
    let shape_err = |e: ndarray::ShapeError| BackendError::Execution(e.to_string());
    match tensor.datum_type() {
        DatumType::F32 => {
            let data = tensor.as_slice::<f32>().map_err(execution)?.to_vec();
            Ok(TensorValue::F32(
                ArrayD::from_shape_vec(shape, data).map_err(shape_err)?,
            ))
        }
        DatumType::F64 => {
            let data = tensor.as_slice::<f64>().map_err(execution)?.to_vec();
            Ok(TensorValue::F64(
                ArrayD::from_shape_vec(shape, data).map_err(shape_err)?,
            ))
        }
        DatumType::I64 => {
            let data = tensor.as_slice::<i64>().map_err(execution)?.to_vec();
            Ok(TensorValue::I64(
                ArrayD::from_shape_vec(shape, data).map_err(shape_err)?,
            ))
        }
        other => Err(BackendError::Execution(format!(
            "unsupported output datum type {other:?}"
        ))
        .into()),
    }
}
