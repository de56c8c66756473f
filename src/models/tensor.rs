//! Tensor values exchanged with inference backends.

use ndarray::{ArrayD, IxDyn};

/// Element type of a [`TensorValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorDtype {
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// 64-bit signed integer
    I64,
}

/// One n-dimensional tensor, typed by element.
///
/// `f64` payloads are accepted everywhere but are narrowed to `f32` before
/// they reach a backend; see [`TensorValue::narrowed`].
#[derive(Debug, Clone, PartialEq)]
pub enum TensorValue {
    /// Single-precision float tensor.
    F32(ArrayD<f32>),
    /// Double-precision float tensor.
    F64(ArrayD<f64>),
    /// 64-bit integer tensor.
    I64(ArrayD<i64>),
}

impl TensorValue {
    /// Convenience constructor for a 1-d `f32` tensor.
    pub fn vector(values: Vec<f32>) -> Self {
        let len = values.len();
        Self::F32(ArrayD::from_shape_vec(IxDyn(&[len]), values).expect("1-d shape matches length"))
    }

    /// Convenience constructor for a 1-d `f64` tensor.
    pub fn vector_f64(values: Vec<f64>) -> Self {
        let len = values.len();
        Self::F64(ArrayD::from_shape_vec(IxDyn(&[len]), values).expect("1-d shape matches length"))
    }

    /// Element type of this tensor.
    pub fn dtype(&self) -> TensorDtype {
        match self {
            Self::F32(_) => TensorDtype::F32,
            Self::F64(_) => TensorDtype::F64,
            Self::I64(_) => TensorDtype::I64,
        }
    }

    /// Tensor shape.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::F32(a) => a.shape(),
            Self::F64(a) => a.shape(),
            Self::I64(a) => a.shape(),
        }
    }

    /// Leading (batch) length: the first dimension, or 1 for a 0-d tensor.
    pub fn batch_len(&self) -> usize {
        self.shape().first().copied().unwrap_or(1)
    }

    /// Narrow `f64` payloads to `f32`; other dtypes pass through unchanged.
    ///
    /// Lossy but accepted: ONNX graphs in this domain are trained in single
    /// precision while analysis code upstream works in double precision.
    pub fn narrowed(self) -> Self {
        match self {
            Self::F64(a) => {
                tracing::trace!(shape = ?a.shape(), "narrowing f64 input to f32");
                Self::F32(a.mapv(|v| v as f32))
            }
            other => other,
        }
    }

    /// Flatten to `f64` values, element order preserved.
    ///
    /// Integer tensors convert exactly for the magnitudes seen here;
    /// combiners use this to fold outputs regardless of backend dtype.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Self::F32(a) => a.iter().map(|&v| f64::from(v)).collect(),
            Self::F64(a) => a.iter().copied().collect(),
            Self::I64(a) => a.iter().map(|&v| v as f64).collect(),
        }
    }
}
