//! Audit Log Port - Persisted record of every submission.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::assessment::PredictionRecord;

/// Columns of the persisted log, in order.
pub const AUDIT_COLUMNS: [&str; 15] = [
    "Age",
    "Sex",
    "Chest Pain Type",
    "Resting BP",
    "Cholesterol",
    "FBS",
    "Rest ECG",
    "Max Heart Rate",
    "Exercise Angina",
    "Oldpeak",
    "Slope",
    "CA",
    "Thal",
    "Prediction",
    "Risk Probability",
];

/// Port for appending submissions to the persisted log.
///
/// # Contract
///
/// Implementations must:
/// - Write the raw, human-readable input values (labels, not codes)
/// - Write the prediction label and the probability rounded to two decimals
/// - Never drop or reorder previously written rows
/// - Serialize concurrent appends so no row is lost
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append one record.
    async fn append(&self, record: &PredictionRecord) -> Result<(), AuditLogError>;
}

/// Errors that can occur while persisting a submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuditLogError {
    /// Permission denied on the log file or its directory.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error while reading or writing the log.
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// An existing log has different columns.
    #[error("Log file {path} has unexpected columns: {found}")]
    SchemaMismatch { path: String, found: String },

    /// The row could not be encoded.
    #[error("Failed to encode row: {message}")]
    Encoding { message: String },
}

impl AuditLogError {
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn schema_mismatch(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            found: found.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Maps an IO error on `path`, keeping permission failures distinct.
    pub fn from_io(path: impl Into<String>, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::io(path, err.to_string()),
        }
    }
}
