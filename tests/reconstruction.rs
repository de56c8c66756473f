//! End-to-end reconstruction over the stub backend.

use showerforge::config::Config;
use showerforge::containers::ReconstructedResult;
use showerforge::core::{PredictionBatch, Reconstructor, ResultCombiner};
use showerforge::error::{ConfigError, ShowerForgeError};
use showerforge::inference::backends::stub::StubBackend;
use showerforge::models::schema::{ModelSchema, SchemaSlot};
use showerforge::models::{TelescopeInput, TensorValue};
use showerforge::subarray::{CameraType, SubarrayLayout};
use showerforge::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Averages every output value across all camera types into the energy
/// field. "No evidence" events produce an invalid result instead of an
/// error.
struct AverageCombiner {
    supported: Vec<CameraType>,
}

impl AverageCombiner {
    fn new(cameras: &[&str]) -> Self {
        Self {
            supported: cameras.iter().map(|cam| CameraType::new(*cam)).collect(),
        }
    }
}

impl ResultCombiner for AverageCombiner {
    fn supported_cameras(&self) -> &[CameraType] {
        &self.supported
    }

    fn combine(&self, batch: &PredictionBatch) -> Result<ReconstructedResult> {
        let mut values = Vec::new();
        for (_, outputs) in batch.iter() {
            for call in outputs {
                for tensor in call {
                    values.extend(tensor.to_f64_vec());
                }
            }
        }
        if values.is_empty() {
            return Ok(ReconstructedResult::default());
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Ok(ReconstructedResult {
            energy: Some(mean),
            is_valid: true,
            ..Default::default()
        })
    }
}

fn echo_backend() -> StubBackend {
    StubBackend::new(ModelSchema::new(
        vec![SchemaSlot::new("image")],
        vec![SchemaSlot::new("energy")],
    ))
}

fn model_paths(cameras: &[&str]) -> HashMap<CameraType, PathBuf> {
    cameras
        .iter()
        .map(|cam| (CameraType::new(*cam), PathBuf::from(format!("{cam}.onnx"))))
        .collect()
}

#[test]
fn configured_subset_of_supported_cameras_constructs() {
    let combiner = AverageCombiner::new(&["LSTCam", "FlashCam", "NectarCam"]);
    let reconstructor =
        Reconstructor::new(echo_backend(), &model_paths(&["LSTCam", "FlashCam"]), combiner)
            .unwrap();
    assert_eq!(reconstructor.registry().len(), 2);
}

#[test]
fn unsupported_configured_camera_fails_naming_it() {
    let combiner = AverageCombiner::new(&["LSTCam", "FlashCam", "NectarCam"]);
    let err = Reconstructor::new(echo_backend(), &model_paths(&["LSTCam", "CHEC"]), combiner)
        .unwrap_err();
    match err {
        ShowerForgeError::Config(ConfigError::UnsupportedCameras(cams)) => {
            assert_eq!(cams, vec!["CHEC".to_owned()]);
        }
        other => panic!("expected UnsupportedCameras, got {other:?}"),
    }
}

#[test]
fn event_with_partially_configured_cameras_skips_the_rest() {
    // Telescopes of camera types {A, A, B}, model configured only for A.
    let combiner = AverageCombiner::new(&["LSTCam", "FlashCam"]);
    let reconstructor =
        Reconstructor::new(echo_backend(), &model_paths(&["LSTCam"]), combiner).unwrap();
    let layout = SubarrayLayout::from_pairs([(1, "LSTCam"), (2, "LSTCam"), (3, "FlashCam")]);
    let inputs = vec![
        (1, TelescopeInput::Single(TensorValue::vector(vec![10.0]))),
        (2, TelescopeInput::Single(TensorValue::vector(vec![20.0]))),
        (3, TelescopeInput::Single(TensorValue::vector(vec![30.0]))),
    ];

    let batch = reconstructor.predict_batch(&inputs, &layout).unwrap();
    assert_eq!(batch.len(), 1);
    let lst = batch.get(&CameraType::new("LSTCam")).unwrap();
    assert_eq!(lst.len(), 2);
    assert_eq!(lst[0][0].to_f64_vec(), vec![10.0]);
    assert_eq!(lst[1][0].to_f64_vec(), vec![20.0]);
    assert!(batch.get(&CameraType::new("FlashCam")).is_none());
}

#[test]
fn two_telescope_event_averages_to_fifteen() {
    let combiner = AverageCombiner::new(&["LSTCam", "FlashCam"]);
    let reconstructor =
        Reconstructor::new(echo_backend(), &model_paths(&["LSTCam"]), combiner).unwrap();
    let layout = SubarrayLayout::from_pairs([(1, "LSTCam"), (2, "LSTCam")]);
    let inputs = vec![
        (1, TelescopeInput::Single(TensorValue::vector(vec![10.0]))),
        (2, TelescopeInput::Single(TensorValue::vector(vec![20.0]))),
    ];

    let result = reconstructor.predict_event(&inputs, &layout).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.energy, Some(15.0));
}

#[test]
fn event_with_no_evidence_is_invalid_not_an_error() {
    let combiner = AverageCombiner::new(&["LSTCam", "FlashCam"]);
    let reconstructor =
        Reconstructor::new(echo_backend(), &model_paths(&["LSTCam"]), combiner).unwrap();
    // Only FlashCam telescopes observed, and FlashCam has no model.
    let layout = SubarrayLayout::from_pairs([(7, "FlashCam")]);
    let inputs = vec![(7, TelescopeInput::Single(TensorValue::vector(vec![1.0])))];

    let result = reconstructor.predict_event(&inputs, &layout).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.energy, None);
}

#[test]
fn combination_is_deterministic() {
    let combiner = AverageCombiner::new(&["LSTCam"]);
    let reconstructor =
        Reconstructor::new(echo_backend(), &model_paths(&["LSTCam"]), combiner).unwrap();
    let layout = SubarrayLayout::from_pairs([(1, "LSTCam"), (2, "LSTCam")]);
    let inputs = vec![
        (1, TelescopeInput::Single(TensorValue::vector(vec![4.0]))),
        (2, TelescopeInput::Single(TensorValue::vector(vec![8.0]))),
    ];

    let first = reconstructor.predict_event(&inputs, &layout).unwrap();
    let second = reconstructor.predict_event(&inputs, &layout).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reconstructor_builds_from_config_mapping() {
    let mut config = Config::default();
    config
        .models
        .paths
        .insert("LSTCam".to_string(), PathBuf::from("lst.onnx"));
    let combiner = AverageCombiner::new(&["LSTCam"]);
    let reconstructor = Reconstructor::from_config(&config, echo_backend(), combiner).unwrap();
    assert_eq!(reconstructor.registry().len(), 1);
}
