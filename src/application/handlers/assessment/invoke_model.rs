//! Runs the classifier on one feature vector.

use crate::domain::assessment::{
    AssessmentError, FeatureVector, RiskAssessment, RiskLabel, RiskProbability,
};
use crate::ports::{ModelError, RiskModel};

/// Calls `classify` then `class_probability` and maps the outputs.
///
/// Conversion failures become `InvalidFeatures`; anything else the model
/// reports, and any out-of-contract output, becomes `PredictionFailed`.
pub fn invoke_model(
    model: &dyn RiskModel,
    features: &FeatureVector,
) -> Result<RiskAssessment, AssessmentError> {
    let class = model.classify(features).map_err(map_model_error)?;
    let probability = model.class_probability(features).map_err(map_model_error)?;

    let label = RiskLabel::from_class(class).ok_or_else(|| {
        AssessmentError::prediction_failed(format!("model returned unknown class {}", class))
    })?;
    let probability = RiskProbability::try_new(probability).map_err(|_| {
        AssessmentError::prediction_failed(format!(
            "model returned probability {} outside [0, 1]",
            probability
        ))
    })?;

    Ok(RiskAssessment { label, probability })
}

fn map_model_error(err: ModelError) -> AssessmentError {
    if err.is_conversion() {
        AssessmentError::invalid_features(err.to_string())
    } else {
        AssessmentError::prediction_failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::FixedRiskModel;
    use crate::domain::assessment::FEATURE_COUNT;

    fn features() -> FeatureVector {
        FeatureVector::from_values([1.0; FEATURE_COUNT])
    }

    #[test]
    fn class_one_is_high_risk() {
        let assessment = invoke_model(&FixedRiskModel::new(1, 0.83), &features()).unwrap();
        assert_eq!(assessment.label, RiskLabel::HighRisk);
        assert_eq!(assessment.probability.display(), "0.83");
    }

    #[test]
    fn class_zero_is_low_risk() {
        let assessment = invoke_model(&FixedRiskModel::new(0, 0.10), &features()).unwrap();
        assert_eq!(assessment.label, RiskLabel::LowRisk);
        assert_eq!(assessment.probability.rounded(), 0.1);
    }

    #[test]
    fn conversion_error_is_invalid_input() {
        let model = FixedRiskModel::failing_with(ModelError::feature_conversion("chol", "bad"));
        let err = invoke_model(&model, &features()).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidFeatures(_)));
        assert!(err.message().starts_with("Invalid input value: "));
    }

    #[test]
    fn other_model_error_is_prediction_failure() {
        let err = invoke_model(&FixedRiskModel::failing("shape mismatch"), &features()).unwrap_err();
        assert_eq!(err.message(), "Prediction failed: shape mismatch");
    }

    #[test]
    fn out_of_contract_outputs_fail() {
        let err = invoke_model(&FixedRiskModel::new(2, 0.5), &features()).unwrap_err();
        assert!(matches!(err, AssessmentError::PredictionFailed(_)));

        let err = invoke_model(&FixedRiskModel::new(1, 1.5), &features()).unwrap_err();
        assert!(matches!(err, AssessmentError::PredictionFailed(_)));

        let err = invoke_model(&FixedRiskModel::new(1, f64::NAN), &features()).unwrap_err();
        assert!(matches!(err, AssessmentError::PredictionFailed(_)));
    }
}
