//! Risk Model Port - Pre-trained classifier interface.
//!
//! The model is an opaque, externally-trained artifact: given a fixed-order
//! feature vector it returns a class and a positive-class probability.
//! Adapters load a concrete artifact format; the application only sees
//! this trait.

use thiserror::Error;

use crate::domain::assessment::FeatureVector;

/// Port for a binary heart-disease classifier.
///
/// # Contract
///
/// Implementations must:
/// - Be read-only after construction (shared across requests without locking)
/// - Return class `0` (low risk) or `1` (high risk) from `classify`
/// - Return the class-1 probability in `[0, 1]` from `class_probability`
/// - Own the decision boundary: `classify` is not derived from a threshold
///   chosen by the caller
pub trait RiskModel: Send + Sync {
    /// Discrete class prediction.
    fn classify(&self, features: &FeatureVector) -> Result<u8, ModelError>;

    /// Probability of the positive (high risk) class.
    fn class_probability(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    /// Short human-readable description, used in startup logs.
    fn describe(&self) -> String;
}

/// Errors raised while invoking a loaded model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A feature could not be converted to the model's numeric domain.
    #[error("feature '{feature}' cannot be used: {reason}")]
    FeatureConversion { feature: String, reason: String },

    /// Any other failure inside the model.
    #[error("{0}")]
    Inference(String),
}

impl ModelError {
    pub fn feature_conversion(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FeatureConversion {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference(message.into())
    }

    /// True when the failure stems from the input values rather than the model.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::FeatureConversion { .. })
    }
}

/// Errors raised while loading the model artifact at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelLoadError {
    /// The artifact file does not exist.
    #[error("Model file not found. Please check '{path}'")]
    NotFound { path: String },

    /// The artifact exists but could not be read.
    #[error("Error loading model: cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// The artifact was read but is not a valid pipeline.
    #[error("Error loading model: {message}")]
    Corrupt { message: String },
}

impl ModelLoadError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
