//! Inference outcome and the per-submission prediction record.

use serde::{Serialize, Serializer};
use std::fmt;

use super::inputs::PatientInputs;
use crate::domain::foundation::{SubmissionId, Timestamp, ValidationError};

/// Binary risk label derived from the model's class prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    HighRisk,
    LowRisk,
}

impl RiskLabel {
    /// Maps the model's class: 1 is high risk, 0 is low risk.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(RiskLabel::HighRisk),
            0 => Some(RiskLabel::LowRisk),
            _ => None,
        }
    }

    /// Text written to the audit log and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "High Risk",
            RiskLabel::LowRisk => "Low Risk",
        }
    }

    /// Headline shown on the result banner.
    pub fn headline(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "High Risk of Heart Disease",
            RiskLabel::LowRisk => "Low Risk of Heart Disease",
        }
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self, RiskLabel::HighRisk)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Positive-class probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RiskProbability(f64);

impl RiskProbability {
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "risk_probability",
                "expected a finite number",
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "risk_probability",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Unrounded model output.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The displayed two-decimal value, as persisted. Parsed back from the
    /// formatted text so the log and the page never disagree on ties.
    pub fn rounded(&self) -> f64 {
        self.display().parse().unwrap_or(self.0)
    }

    /// Two-decimal text, as displayed.
    pub fn display(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for RiskProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Result of one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub label: RiskLabel,
    pub probability: RiskProbability,
}

/// One submission: validated inputs plus the derived outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    submission_id: SubmissionId,
    submitted_at: Timestamp,
    inputs: PatientInputs,
    assessment: RiskAssessment,
}

impl PredictionRecord {
    pub fn new(inputs: PatientInputs, assessment: RiskAssessment) -> Self {
        Self {
            submission_id: SubmissionId::new(),
            submitted_at: Timestamp::now(),
            inputs,
            assessment,
        }
    }

    pub fn submission_id(&self) -> SubmissionId {
        self.submission_id
    }

    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    pub fn inputs(&self) -> &PatientInputs {
        &self.inputs
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }
}
