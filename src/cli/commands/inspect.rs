use crate::config::Config;
use crate::Result;

/// Load every configured model and print its declared schema.
#[cfg(feature = "onnx")]
pub fn inspect(config: &Config, json: bool) -> Result<()> {
    use crate::error::ConfigError;
    use crate::inference::backend::InferenceBackend;
    use crate::inference::backends::onnx::OnnxBackend;
    use crate::models::schema::ModelSchema;
    use std::collections::BTreeMap;

    let backend = OnnxBackend::new();
    let mut schemas: BTreeMap<String, ModelSchema> = BTreeMap::new();
    let mut cameras: Vec<_> = config.models.paths.iter().collect();
    cameras.sort_by(|a, b| a.0.cmp(b.0));
    for (camera, path) in cameras {
        let (_, schema) = backend.load_model(path)?;
        schemas.insert(camera.clone(), schema);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&schemas)
            .map_err(|e| ConfigError::Invalid(format!("failed to render schemas: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }
    for (camera, schema) in &schemas {
        println!("{camera}:");
        for slot in &schema.inputs {
            println!("  input  {} {}", slot.name, format_shape(&slot.shape));
        }
        for slot in &schema.outputs {
            println!("  output {} {}", slot.name, format_shape(&slot.shape));
        }
    }
    Ok(())
}

/// Without the `onnx` feature there is no backend to read schemas with.
#[cfg(not(feature = "onnx"))]
pub fn inspect(_config: &Config, _json: bool) -> Result<()> {
    Err(crate::error::ConfigError::Invalid(
        "built without the 'onnx' feature; inspect needs a model backend".into(),
    )
    .into())
}

#[cfg(feature = "onnx")]
fn format_shape(shape: &[Option<usize>]) -> String {
    let dims: Vec<String> = shape
        .iter()
        .map(|dim| match dim {
            Some(d) => d.to_string(),
            None => "?".to_string(),
        })
        .collect();
    format!("[{}]", dims.join(", "))
}
