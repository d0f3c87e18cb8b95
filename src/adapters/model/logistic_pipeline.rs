//! Logistic Pipeline Adapter - Implementation of RiskModel.
//!
//! Loads a standard-scaler + logistic-regression pipeline exported by the
//! training pipeline as JSON:
//!
//! ```text
//! {
//!   "format_version": 1,
//!   "feature_names": ["age", "sex", ..., "thal"],
//!   "scaler": { "mean": [..13], "scale": [..13] },
//!   "classifier": { "type": "logistic_regression", "coefficients": [..13], "intercept": 0.0 }
//! }
//! ```
//!
//! The artifact is validated completely at load time; inference never
//! touches the file again.

use serde::Deserialize;
use std::path::Path;

use crate::domain::assessment::{FeatureVector, FEATURE_COUNT, FEATURE_ORDER};
use crate::ports::{ModelError, ModelLoadError, RiskModel};

const SUPPORTED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct PipelineArtifact {
    format_version: u32,
    feature_names: Vec<String>,
    #[serde(default)]
    scaler: Option<ScalerArtifact>,
    classifier: ClassifierArtifact,
}

#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClassifierArtifact {
    LogisticRegression { coefficients: Vec<f64>, intercept: f64 },
}

/// Standardize-then-logistic-regression classifier.
///
/// `classify` returns 1 when the decision function is strictly positive,
/// which is the same boundary as probability > 0.5.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticPipelineModel {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticPipelineModel {
    /// Reads and validates an artifact from disk.
    ///
    /// # Errors
    ///
    /// - `ModelLoadError::NotFound` if the file does not exist
    /// - `ModelLoadError::Io` if it cannot be read
    /// - `ModelLoadError::Corrupt` if it is not a valid pipeline
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ModelLoadError::not_found(path.display().to_string()),
            _ => ModelLoadError::io(path.display().to_string(), e.to_string()),
        })?;
        Self::from_json(&json)
    }

    /// Parses and validates an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelLoadError> {
        let artifact: PipelineArtifact = serde_json::from_str(json)
            .map_err(|e| ModelLoadError::corrupt(format!("invalid artifact JSON: {}", e)))?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: PipelineArtifact) -> Result<Self, ModelLoadError> {
        if artifact.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(ModelLoadError::corrupt(format!(
                "unsupported format_version {} (expected {})",
                artifact.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_ORDER) {
            return Err(ModelLoadError::corrupt(format!(
                "feature_names {:?} do not match the expected order {:?}",
                artifact.feature_names, FEATURE_ORDER
            )));
        }

        let (mean, scale) = match artifact.scaler {
            Some(scaler) => {
                let mean = fixed_vector("scaler.mean", scaler.mean)?;
                let scale = fixed_vector("scaler.scale", scaler.scale)?;
                if let Some(index) = scale.iter().position(|s| *s == 0.0) {
                    return Err(ModelLoadError::corrupt(format!(
                        "scaler.scale for '{}' is zero",
                        FEATURE_ORDER[index]
                    )));
                }
                (mean, scale)
            }
            None => ([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT]),
        };

        let ClassifierArtifact::LogisticRegression {
            coefficients,
            intercept,
        } = artifact.classifier;
        let coefficients = fixed_vector("classifier.coefficients", coefficients)?;
        if !intercept.is_finite() {
            return Err(ModelLoadError::corrupt("classifier.intercept is not finite"));
        }

        Ok(Self {
            mean,
            scale,
            coefficients,
            intercept,
        })
    }

    /// Signed distance from the decision boundary.
    fn decision_function(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let mut score = self.intercept;
        for (index, (name, value)) in features.named().enumerate() {
            if !value.is_finite() {
                return Err(ModelError::feature_conversion(name, "value is not a finite number"));
            }
            let standardized = (value - self.mean[index]) / self.scale[index];
            score += self.coefficients[index] * standardized;
        }
        if !score.is_finite() {
            return Err(ModelError::inference("decision function overflowed"));
        }
        Ok(score)
    }
}

impl RiskModel for LogisticPipelineModel {
    fn classify(&self, features: &FeatureVector) -> Result<u8, ModelError> {
        let score = self.decision_function(features)?;
        Ok(u8::from(score > 0.0))
    }

    fn class_probability(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let score = self.decision_function(features)?;
        Ok(sigmoid(score))
    }

    fn describe(&self) -> String {
        format!(
            "logistic regression pipeline ({} standardized features)",
            FEATURE_COUNT
        )
    }
}

/// Numerically stable logistic function.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

fn fixed_vector(name: &str, values: Vec<f64>) -> Result<[f64; FEATURE_COUNT], ModelLoadError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ModelLoadError::corrupt(format!(
            "{}[{}] is not a finite number",
            name, index
        )));
    }
    let len = values.len();
    values.try_into().map_err(|_| {
        ModelLoadError::corrupt(format!(
            "expected {} values in {}, got {}",
            FEATURE_COUNT, name, len
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn artifact() -> serde_json::Value {
        json!({
            "format_version": 1,
            "feature_names": FEATURE_ORDER,
            "scaler": {
                "mean": vec![0.0; FEATURE_COUNT],
                "scale": vec![1.0; FEATURE_COUNT],
            },
            "classifier": {
                "type": "logistic_regression",
                "coefficients": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "intercept": -50.0,
            }
        })
    }

    fn features_with_age(age: f64) -> FeatureVector {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = age;
        FeatureVector::from_values(values)
    }

    #[test]
    fn classifies_on_the_decision_boundary() {
        let model = LogisticPipelineModel::from_json(&artifact().to_string()).unwrap();

        assert_eq!(model.classify(&features_with_age(60.0)).unwrap(), 1);
        assert_eq!(model.classify(&features_with_age(40.0)).unwrap(), 0);
        // Exactly on the boundary is not positive.
        assert_eq!(model.classify(&features_with_age(50.0)).unwrap(), 0);
        assert!((model.class_probability(&features_with_age(50.0)).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn probability_agrees_with_class() {
        let model = LogisticPipelineModel::from_json(&artifact().to_string()).unwrap();
        for age in [1.0, 30.0, 49.0, 51.0, 80.0, 120.0] {
            let features = features_with_age(age);
            let class = model.classify(&features).unwrap();
            let p = model.class_probability(&features).unwrap();
            assert!((0.0..=1.0).contains(&p));
            assert_eq!(class == 1, p > 0.5, "age {}", age);
        }
    }

    #[test]
    fn applies_standard_scaling() {
        let mut value = artifact();
        value["scaler"]["mean"][0] = json!(50.0);
        value["scaler"]["scale"][0] = json!(10.0);
        value["classifier"]["intercept"] = json!(0.0);
        let model = LogisticPipelineModel::from_json(&value.to_string()).unwrap();

        // (60 - 50) / 10 = 1.0
        let p = model.class_probability(&features_with_age(60.0)).unwrap();
        assert!((p - sigmoid(1.0)).abs() < 1e-12);
    }

    #[test]
    fn scaler_is_optional() {
        let mut value = artifact();
        value.as_object_mut().unwrap().remove("scaler");
        let model = LogisticPipelineModel::from_json(&value.to_string()).unwrap();
        assert_eq!(model.classify(&features_with_age(51.0)).unwrap(), 1);
    }

    #[test]
    fn rejects_reordered_features() {
        let mut value = artifact();
        value["feature_names"][0] = json!("sex");
        value["feature_names"][1] = json!("age");
        let err = LogisticPipelineModel::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Corrupt { .. }));
        assert!(err.to_string().contains("feature_names"));
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        let mut value = artifact();
        value["classifier"]["coefficients"] = json!([1.0, 2.0]);
        let err = LogisticPipelineModel::from_json(&value.to_string()).unwrap_err();
        assert_eq!(
            err,
            ModelLoadError::corrupt("expected 13 values in classifier.coefficients, got 2")
        );
    }

    #[test]
    fn rejects_zero_scale() {
        let mut value = artifact();
        value["scaler"]["scale"][4] = json!(0.0);
        let err = LogisticPipelineModel::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("'chol'"));
    }

    #[test]
    fn rejects_unknown_classifier_and_version() {
        let mut value = artifact();
        value["classifier"]["type"] = json!("random_forest");
        assert!(LogisticPipelineModel::from_json(&value.to_string()).is_err());

        let mut value = artifact();
        value["format_version"] = json!(2);
        let err = LogisticPipelineModel::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("format_version"));
    }

    #[test]
    fn rejects_garbage() {
        let err = LogisticPipelineModel::from_json("\u{80}PICKLE").unwrap_err();
        assert!(matches!(err, ModelLoadError::Corrupt { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = LogisticPipelineModel::load(&path).unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn load_reads_artifact_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", artifact()).unwrap();
        let model = LogisticPipelineModel::load(file.path()).unwrap();
        assert!(model.describe().contains("logistic"));
    }

    #[test]
    fn non_finite_feature_is_a_conversion_error() {
        let model = LogisticPipelineModel::from_json(&artifact().to_string()).unwrap();
        let err = model.classify(&features_with_age(f64::NAN)).unwrap_err();
        assert!(err.is_conversion());
    }
}
