use crate::config::Config;
use crate::error::ConfigError;
use crate::Result;

/// Check that the configuration parses and every configured model file
/// exists.
pub fn validate(config: &Config) -> Result<()> {
    if config.models.paths.is_empty() {
        tracing::warn!("configuration declares no models");
    }
    let mut cameras: Vec<_> = config.models.paths.iter().collect();
    cameras.sort_by(|a, b| a.0.cmp(b.0));
    for (camera, path) in cameras {
        if !path.exists() {
            return Err(ConfigError::ModelFileNotFound(format!(
                "{} ({camera})",
                path.display()
            ))
            .into());
        }
        tracing::info!(camera = %camera, path = %path.display(), "model file present");
    }
    println!(
        "configuration OK: {} model(s) configured",
        config.models.paths.len()
    );
    Ok(())
}
