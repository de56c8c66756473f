//! Camera-grouped event dispatch.

use crate::core::registry::ModelRegistry;
use crate::error::{DispatchError, Result};
use crate::inference::backend::InferenceBackend;
use crate::models::input::TelescopeInput;
use crate::models::tensor::TensorValue;
use crate::subarray::{ArrayLayout, CameraType, TelescopeId};
use std::collections::BTreeMap;

/// Raw outputs of one model call, one tensor per declared output slot.
pub type ModelOutputs = Vec<TensorValue>;

/// Per-camera-type model outputs for one event.
///
/// A supported camera type with a registered model always has an entry,
/// possibly empty when no telescope of that type observed the event; a
/// camera type with no registered model has no entry. Entries preserve the
/// order telescopes appeared in the event input.
#[derive(Debug, Clone, Default)]
pub struct PredictionBatch {
    by_camera: BTreeMap<CameraType, Vec<ModelOutputs>>,
}

impl PredictionBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outputs for the given camera type, if any were produced.
    pub fn get(&self, camera: &CameraType) -> Option<&[ModelOutputs]> {
        self.by_camera.get(camera).map(Vec::as_slice)
    }

    /// Camera types with an entry, in sorted order.
    pub fn cameras(&self) -> impl Iterator<Item = &CameraType> {
        self.by_camera.keys()
    }

    /// Iterate `(camera type, outputs)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CameraType, &[ModelOutputs])> {
        self.by_camera
            .iter()
            .map(|(cam, outputs)| (cam, outputs.as_slice()))
    }

    /// Number of camera-type entries.
    pub fn len(&self) -> usize {
        self.by_camera.len()
    }

    /// Whether the batch holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.by_camera.is_empty()
    }

    fn insert(&mut self, camera: CameraType, outputs: Vec<ModelOutputs>) {
        self.by_camera.insert(camera, outputs);
    }
}

/// Routes one event's per-telescope inputs to the matching models.
///
/// Borrowed from the owning reconstructor per event; holds no state of its
/// own.
pub struct CameraDispatcher<'a, B: InferenceBackend> {
    registry: &'a ModelRegistry<B>,
    supported: &'a [CameraType],
}

impl<'a, B: InferenceBackend> CameraDispatcher<'a, B> {
    /// Create a dispatcher over the given registry and supported-camera
    /// declaration.
    pub fn new(registry: &'a ModelRegistry<B>, supported: &'a [CameraType]) -> Self {
        Self { registry, supported }
    }

    /// Group telescopes by camera type and run each observation through the
    /// matching model.
    ///
    /// Cameras are visited in supported-declaration order. A supported
    /// camera without a registered model is skipped. Telescopes keep their
    /// event-input order within a camera group, and each observation is one
    /// model call; a failing call aborts the whole event.
    pub fn dispatch<L: ArrayLayout>(
        &self,
        inputs: &[(TelescopeId, TelescopeInput)],
        layout: &L,
    ) -> Result<PredictionBatch> {
        let mut batch = PredictionBatch::new();
        for camera in self.supported {
            let Some(model) = self.registry.get(camera) else {
                tracing::debug!(camera = %camera, "no model registered, skipping camera type");
                continue;
            };
            let mut outputs = Vec::new();
            for (tel_id, input) in inputs {
                let tel_camera = layout
                    .camera_type(*tel_id)
                    .ok_or(DispatchError::UnknownTelescope(*tel_id))?;
                if tel_camera == camera {
                    outputs.push(model.predict(input)?);
                }
            }
            batch.insert(camera.clone(), outputs);
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowerForgeError;
    use crate::inference::backends::stub::StubBackend;
    use crate::models::schema::{ModelSchema, SchemaSlot};
    use crate::subarray::SubarrayLayout;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn registry(cams: &[&str]) -> ModelRegistry<StubBackend> {
        let backend = Arc::new(StubBackend::new(ModelSchema::new(
            vec![SchemaSlot::new("image")],
            vec![SchemaSlot::new("energy")],
        )));
        let paths: HashMap<_, _> = cams
            .iter()
            .map(|cam| (CameraType::new(*cam), PathBuf::from(format!("{cam}.onnx"))))
            .collect();
        let supported: Vec<CameraType> = cams.iter().map(|c| CameraType::new(*c)).collect();
        ModelRegistry::load(backend, &paths, &supported).unwrap()
    }

    fn single(value: f32) -> TelescopeInput {
        TelescopeInput::Single(TensorValue::vector(vec![value]))
    }

    #[test]
    fn unconfigured_camera_is_skipped_without_error() {
        // Telescopes of LSTCam and FlashCam, model only for LSTCam.
        let registry = registry(&["LSTCam"]);
        let supported = vec![CameraType::new("LSTCam"), CameraType::new("FlashCam")];
        let dispatcher = CameraDispatcher::new(&registry, &supported);
        let layout =
            SubarrayLayout::from_pairs([(1, "LSTCam"), (2, "LSTCam"), (3, "FlashCam")]);
        let inputs = vec![(1, single(10.0)), (2, single(20.0)), (3, single(30.0))];

        let batch = dispatcher.dispatch(&inputs, &layout).unwrap();
        assert_eq!(batch.len(), 1);
        let lst = batch.get(&CameraType::new("LSTCam")).unwrap();
        assert_eq!(lst.len(), 2);
        // Input-mapping order preserved within the group.
        assert_eq!(lst[0][0].to_f64_vec(), vec![10.0]);
        assert_eq!(lst[1][0].to_f64_vec(), vec![20.0]);
        assert!(batch.get(&CameraType::new("FlashCam")).is_none());
    }

    #[test]
    fn configured_camera_with_no_telescopes_yields_empty_entry() {
        let registry = registry(&["LSTCam", "FlashCam"]);
        let supported = vec![CameraType::new("LSTCam"), CameraType::new("FlashCam")];
        let dispatcher = CameraDispatcher::new(&registry, &supported);
        let layout = SubarrayLayout::from_pairs([(1, "LSTCam")]);
        let inputs = vec![(1, single(5.0))];

        let batch = dispatcher.dispatch(&inputs, &layout).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(&CameraType::new("FlashCam")).unwrap().len(), 0);
    }

    #[test]
    fn unknown_telescope_aborts_dispatch() {
        let registry = registry(&["LSTCam"]);
        let supported = vec![CameraType::new("LSTCam")];
        let dispatcher = CameraDispatcher::new(&registry, &supported);
        let layout = SubarrayLayout::from_pairs([(1, "LSTCam")]);
        let inputs = vec![(1, single(1.0)), (42, single(2.0))];

        let err = dispatcher.dispatch(&inputs, &layout).unwrap_err();
        assert!(matches!(
            err,
            ShowerForgeError::Dispatch(DispatchError::UnknownTelescope(42))
        ));
    }

    #[test]
    fn one_bad_input_aborts_the_whole_event() {
        let registry = registry(&["LSTCam"]);
        let supported = vec![CameraType::new("LSTCam")];
        let dispatcher = CameraDispatcher::new(&registry, &supported);
        let layout = SubarrayLayout::from_pairs([(1, "LSTCam"), (2, "LSTCam")]);
        // Second telescope supplies two tensors against a one-input schema.
        let inputs = vec![
            (1, single(1.0)),
            (
                2,
                TelescopeInput::Positional(vec![
                    TensorValue::vector(vec![1.0]),
                    TensorValue::vector(vec![2.0]),
                ]),
            ),
        ];

        assert!(matches!(
            dispatcher.dispatch(&inputs, &layout).unwrap_err(),
            ShowerForgeError::Predict(_)
        ));
    }
}
