//! Assessment-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors that abort a submission.
///
/// Persistence failures are not here: they are reported alongside a
/// successful prediction rather than replacing it.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentError {
    /// The model artifact failed to load at startup.
    ModelUnavailable(String),
    /// A form value is malformed or outside its domain.
    InvalidInput(ValidationError),
    /// The model rejected the feature vector during conversion.
    InvalidFeatures(String),
    /// Any other failure while invoking the model.
    PredictionFailed(String),
}

impl AssessmentError {
    pub fn model_unavailable(message: impl Into<String>) -> Self {
        AssessmentError::ModelUnavailable(message.into())
    }
    pub fn invalid_features(message: impl Into<String>) -> Self {
        AssessmentError::InvalidFeatures(message.into())
    }
    pub fn prediction_failed(message: impl Into<String>) -> Self {
        AssessmentError::PredictionFailed(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::ModelUnavailable(_) => ErrorCode::ModelUnavailable,
            AssessmentError::InvalidInput(err) => err.code(),
            AssessmentError::InvalidFeatures(_) => ErrorCode::ValidationFailed,
            AssessmentError::PredictionFailed(_) => ErrorCode::PredictionFailed,
        }
    }
    /// One-line message shown to the user.
    pub fn message(&self) -> String {
        match self {
            AssessmentError::ModelUnavailable(msg) => msg.clone(),
            AssessmentError::InvalidInput(err) => format!("Invalid input value: {}", err),
            AssessmentError::InvalidFeatures(msg) => format!("Invalid input value: {}", msg),
            AssessmentError::PredictionFailed(msg) => format!("Prediction failed: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::InvalidInput(err)
    }
}
