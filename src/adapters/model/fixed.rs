//! Fixed Risk Model - deterministic stand-in for a trained classifier.
//!
//! Returns a pre-configured class and probability for every input, tracks
//! how often it was called, and can be switched into a failing mode.
//!
//! # Example
//!
//! ```ignore
//! let model = FixedRiskModel::new(1, 0.83);
//! assert_eq!(model.classify(&features)?, 1);
//! assert_eq!(model.call_count(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::assessment::FeatureVector;
use crate::ports::{ModelError, RiskModel};

#[derive(Debug)]
pub struct FixedRiskModel {
    class: u8,
    probability: f64,
    failure: Option<ModelError>,
    calls: AtomicUsize,
}

impl FixedRiskModel {
    pub fn new(class: u8, probability: f64) -> Self {
        Self {
            class,
            probability,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// High risk when `probability > 0.5`, mirroring a calibrated classifier.
    pub fn with_probability(probability: f64) -> Self {
        Self::new(u8::from(probability > 0.5), probability)
    }

    /// A model whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::failing_with(ModelError::inference(message))
    }

    pub fn failing_with(error: ModelError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(0, 0.0)
        }
    }

    /// Number of `classify` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ModelError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl RiskModel for FixedRiskModel {
    fn classify(&self, _features: &FeatureVector) -> Result<u8, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.class)
    }

    fn class_probability(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
        self.check()?;
        Ok(self.probability)
    }

    fn describe(&self) -> String {
        format!("fixed model (class {}, p={})", self.class, self.probability)
    }
}
