//! Event reconstruction orchestrator.

use crate::config::Config;
use crate::containers::ReconstructedResult;
use crate::core::combine::ResultCombiner;
use crate::core::dispatch::{CameraDispatcher, PredictionBatch};
use crate::core::registry::ModelRegistry;
use crate::error::Result;
use crate::inference::backend::InferenceBackend;
use crate::models::input::TelescopeInput;
use crate::subarray::{ArrayLayout, CameraType, TelescopeId};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Reconstructs one shower-level result per event from per-telescope model
/// inputs.
///
/// Composes the model registry, the camera dispatcher and a combiner
/// variant. Models are loaded once at construction and live until the
/// reconstructor is dropped; prediction is synchronous call-and-return.
pub struct Reconstructor<B: InferenceBackend, C: ResultCombiner> {
    registry: ModelRegistry<B>,
    combiner: C,
}

impl<B: InferenceBackend, C: ResultCombiner> std::fmt::Debug for Reconstructor<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconstructor").finish_non_exhaustive()
    }
}

impl<B: InferenceBackend, C: ResultCombiner> Reconstructor<B, C> {
    /// Build a reconstructor from a camera-type to model-path mapping.
    ///
    /// Fails with
    /// [`ConfigError::UnsupportedCameras`](crate::error::ConfigError) when
    /// the mapping names a camera type the combiner does not declare, and
    /// with [`ModelError::LoadFailed`](crate::error::ModelError) when the
    /// backend cannot load a configured model.
    pub fn new(
        backend: B,
        model_paths: &HashMap<CameraType, PathBuf>,
        combiner: C,
    ) -> Result<Self> {
        let registry =
            ModelRegistry::load(Arc::new(backend), model_paths, combiner.supported_cameras())?;
        Ok(Self { registry, combiner })
    }

    /// Build a reconstructor from the crate configuration's `models.paths`
    /// mapping.
    pub fn from_config(config: &Config, backend: B, combiner: C) -> Result<Self> {
        Self::new(backend, &config.models.camera_paths(), combiner)
    }

    /// Predict one event: dispatch per-telescope inputs through the
    /// camera-matched models, then fold the outputs into a single result.
    pub fn predict_event<L: ArrayLayout>(
        &self,
        inputs: &[(TelescopeId, TelescopeInput)],
        layout: &L,
    ) -> Result<ReconstructedResult> {
        let batch = self.predict_batch(inputs, layout)?;
        self.combiner.combine(&batch)
    }

    /// Dispatch only: the grouped raw model outputs for one event, without
    /// combining them.
    pub fn predict_batch<L: ArrayLayout>(
        &self,
        inputs: &[(TelescopeId, TelescopeInput)],
        layout: &L,
    ) -> Result<PredictionBatch> {
        CameraDispatcher::new(&self.registry, self.combiner.supported_cameras())
            .dispatch(inputs, layout)
    }

    /// The loaded model registry.
    pub fn registry(&self) -> &ModelRegistry<B> {
        &self.registry
    }

    /// The combiner variant.
    pub fn combiner(&self) -> &C {
        &self.combiner
    }
}
