//! Audit log configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where submitted assessments are appended.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditLogConfig {
    /// Path to the CSV log, created with a header row on first write
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl AuditLogConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("audit_log.path"));
        }
        Ok(())
    }
}

impl Default for AuditLogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("heart_predictions.csv")
}
