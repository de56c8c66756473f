//! Per-telescope model inputs.

use crate::models::tensor::TensorValue;
use std::collections::BTreeMap;

/// Model-ready input for one telescope observation.
///
/// The calling convention is fixed when the input is constructed, not
/// re-inspected at call time: a bare tensor dispatches as a single
/// positional argument, a sequence dispatches positionally in schema order,
/// and a map dispatches by declared input name. Positional and named
/// arguments cannot be mixed by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TelescopeInput {
    /// One tensor, passed as the model's single positional argument.
    Single(TensorValue),
    /// Ordered tensors mapped onto the schema's input slots in declared order.
    Positional(Vec<TensorValue>),
    /// Tensors addressed by declared input-slot name.
    Named(BTreeMap<String, TensorValue>),
}

impl TelescopeInput {
    /// Build a named input from `(name, tensor)` pairs.
    pub fn named<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, TensorValue)>,
        S: Into<String>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Number of argument tensors this input supplies.
    pub fn arity(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Positional(values) => values.len(),
            Self::Named(values) => values.len(),
        }
    }
}

impl From<TensorValue> for TelescopeInput {
    fn from(value: TensorValue) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<TensorValue>> for TelescopeInput {
    fn from(values: Vec<TensorValue>) -> Self {
        Self::Positional(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_counts_supplied_tensors() {
        assert_eq!(TelescopeInput::from(TensorValue::vector(vec![1.0])).arity(), 1);
        let positional = TelescopeInput::from(vec![
            TensorValue::vector(vec![1.0]),
            TensorValue::vector(vec![2.0]),
        ]);
        assert_eq!(positional.arity(), 2);
        let named = TelescopeInput::named([("image", TensorValue::vector(vec![1.0]))]);
        assert_eq!(named.arity(), 1);
    }
}
