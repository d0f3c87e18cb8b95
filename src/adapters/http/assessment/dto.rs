//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::SubmitAssessmentResult;
use crate::domain::assessment::{AssessmentError, RawPatientInputs};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A JSON field value: numbers for measurements, labels for categories.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(number) => number.to_string(),
            FieldValue::Text(text) => text,
        }
    }
}

/// Request to assess one patient.
///
/// Every field is optional at the wire level so a missing value is reported
/// by the validator as an empty field rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub age: Option<FieldValue>,
    pub sex: Option<FieldValue>,
    pub chest_pain_type: Option<FieldValue>,
    pub resting_bp: Option<FieldValue>,
    pub cholesterol: Option<FieldValue>,
    pub fasting_blood_sugar: Option<FieldValue>,
    pub rest_ecg: Option<FieldValue>,
    pub max_heart_rate: Option<FieldValue>,
    pub exercise_angina: Option<FieldValue>,
    pub oldpeak: Option<FieldValue>,
    pub slope: Option<FieldValue>,
    pub major_vessels: Option<FieldValue>,
    pub thalassemia: Option<FieldValue>,
}

impl From<AssessmentRequest> for RawPatientInputs {
    fn from(req: AssessmentRequest) -> Self {
        let text = |value: Option<FieldValue>| value.map(FieldValue::into_text).unwrap_or_default();
        Self {
            age: text(req.age),
            sex: text(req.sex),
            chest_pain_type: text(req.chest_pain_type),
            resting_bp: text(req.resting_bp),
            cholesterol: text(req.cholesterol),
            fasting_blood_sugar: text(req.fasting_blood_sugar),
            rest_ecg: text(req.rest_ecg),
            max_heart_rate: text(req.max_heart_rate),
            exercise_angina: text(req.exercise_angina),
            oldpeak: text(req.oldpeak),
            slope: text(req.slope),
            major_vessels: text(req.major_vessels),
            thalassemia: text(req.thalassemia),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a completed assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub submission_id: String,
    pub submitted_at: String,
    pub prediction: String,
    pub high_risk: bool,
    pub risk_probability: f64,
    pub display_probability: String,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}

impl From<&SubmitAssessmentResult> for AssessmentResponse {
    fn from(result: &SubmitAssessmentResult) -> Self {
        let assessment = result.record.assessment();
        Self {
            submission_id: result.record.submission_id().to_string(),
            submitted_at: result.record.submitted_at().to_string(),
            prediction: assessment.label.as_str().to_string(),
            high_risk: assessment.label.is_high_risk(),
            risk_probability: assessment.probability.rounded(),
            display_probability: assessment.probability.display(),
            saved: result.save.is_saved(),
            save_error: result.save.error_message().map(String::from),
        }
    }
}

/// Liveness/readiness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_error: Option<String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

impl From<&AssessmentError> for ErrorResponse {
    fn from(err: &AssessmentError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
        }
    }
}
