//! Model input/output schemas.
//!
//! A schema is declared by the serialized model itself and read out by the
//! backend at load time; it is immutable for the life of the loaded model.

use serde::{Deserialize, Serialize};

/// One named input or output position declared by a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSlot {
    /// Slot name as declared in the model graph.
    pub name: String,
    /// Declared shape; `None` entries are dynamic dimensions.
    pub shape: Vec<Option<usize>>,
}

impl SchemaSlot {
    /// Create a slot with a fully dynamic shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: Vec::new(),
        }
    }

    /// Create a slot with a declared shape.
    pub fn with_shape(name: impl Into<String>, shape: Vec<Option<usize>>) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Ordered input and output slots of one loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Input slots in declared order.
    pub inputs: Vec<SchemaSlot>,
    /// Output slots in declared order.
    pub outputs: Vec<SchemaSlot>,
}

impl ModelSchema {
    /// Build a schema from input and output slots.
    pub fn new(inputs: Vec<SchemaSlot>, outputs: Vec<SchemaSlot>) -> Self {
        Self { inputs, outputs }
    }

    /// Number of declared input slots.
    pub fn n_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of declared output slots.
    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Declared input names, in order.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|slot| slot.name.as_str())
    }

    /// Position of a named input slot, if declared.
    pub fn input_position(&self, name: &str) -> Option<usize> {
        self.inputs.iter().position(|slot| slot.name == name)
    }
}
