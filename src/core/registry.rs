//! Camera-type to model registry.

use crate::error::{ConfigError, Result};
use crate::inference::backend::InferenceBackend;
use crate::models::model::InferenceModel;
use crate::subarray::CameraType;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Immutable mapping from camera type to its loaded model.
///
/// Built once at reconstructor construction. Every configured camera type
/// must appear in the reconstructor's supported-camera declaration; a
/// camera type in the supported set with no configured model is fine and is
/// simply skipped at dispatch time.
pub struct ModelRegistry<B: InferenceBackend> {
    models: HashMap<CameraType, InferenceModel<B>>,
}

impl<B: InferenceBackend> std::fmt::Debug for ModelRegistry<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry").finish_non_exhaustive()
    }
}

impl<B: InferenceBackend> ModelRegistry<B> {
    /// Load one model per configured `(camera type, path)` pair.
    ///
    /// The supported-set check runs before any model is loaded, so a
    /// misconfigured camera name is reported as
    /// [`ConfigError::UnsupportedCameras`] even when its path would also
    /// fail to load. Offending names are sorted.
    pub fn load(
        backend: Arc<B>,
        model_paths: &HashMap<CameraType, PathBuf>,
        supported: &[CameraType],
    ) -> Result<Self> {
        let mut unsupported: Vec<String> = model_paths
            .keys()
            .filter(|cam| !supported.contains(cam))
            .map(|cam| cam.as_str().to_owned())
            .collect();
        if !unsupported.is_empty() {
            unsupported.sort();
            return Err(ConfigError::UnsupportedCameras(unsupported).into());
        }

        let mut models = HashMap::with_capacity(model_paths.len());
        for (cam, path) in model_paths {
            let model = InferenceModel::load(Arc::clone(&backend), path)?;
            tracing::info!(
                camera = %cam,
                path = %path.display(),
                backend = backend.name(),
                inputs = model.schema().n_inputs(),
                "loaded model"
            );
            models.insert(cam.clone(), model);
        }
        Ok(Self { models })
    }

    /// Model registered for the given camera type, if any.
    pub fn get(&self, camera: &CameraType) -> Option<&InferenceModel<B>> {
        self.models.get(camera)
    }

    /// Camera types with a registered model.
    pub fn cameras(&self) -> impl Iterator<Item = &CameraType> {
        self.models.keys()
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
