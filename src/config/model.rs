//! Model artifact configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Location of the pre-trained classifier artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized pipeline, relative to the working directory
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
}

impl ModelConfig {
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.artifact_path"));
        }
        let is_json = self
            .artifact_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(ValidationError::UnsupportedArtifactFormat(
                self.artifact_path.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("models/heart_disease_pipeline.json")
}
