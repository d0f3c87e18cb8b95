//! SubmitAssessmentHandler - Command handler for one risk assessment.
//!
//! Validate → encode → invoke the model → append to the audit log.
//! A failed append never discards the prediction; it is reported next to it.

use std::sync::Arc;

use super::invoke_model::invoke_model;
use super::model_status::ModelStatus;
use crate::domain::assessment::{
    AssessmentError, FeatureVector, PatientInputs, PredictionRecord, RawPatientInputs,
};
use crate::ports::AuditLog;

/// Command carrying the raw form values, exactly as submitted.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub inputs: RawPatientInputs,
}

/// Whether the submission reached the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    /// User-visible failure line, if the append failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SaveOutcome::Saved => None,
            SaveOutcome::Failed(message) => Some(message),
        }
    }
}

/// Result of a completed prediction.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub record: PredictionRecord,
    pub save: SaveOutcome,
}

/// Handler for assessment submissions.
pub struct SubmitAssessmentHandler {
    model: ModelStatus,
    audit_log: Arc<dyn AuditLog>,
}

impl SubmitAssessmentHandler {
    pub fn new(model: ModelStatus, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { model, audit_log }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        // 1. Refuse outright when the model never loaded
        let model = match &self.model {
            ModelStatus::Ready(model) => model,
            ModelStatus::Unavailable(err) => {
                tracing::warn!(error = %err, "Submission rejected: model unavailable");
                return Err(AssessmentError::model_unavailable(err.to_string()));
            }
        };

        // 2. Validate every field against its domain
        let inputs = PatientInputs::parse(&cmd.inputs).map_err(|err| {
            tracing::info!(field = err.field(), error = %err, "Submission rejected: invalid input");
            AssessmentError::from(err)
        })?;

        // 3. Encode and run inference
        let features = FeatureVector::from_inputs(&inputs);
        let assessment = invoke_model(model.as_ref(), &features).map_err(|err| {
            tracing::error!(error = %err, "Inference failed");
            err
        })?;

        let record = PredictionRecord::new(inputs, assessment);
        tracing::info!(
            submission_id = %record.submission_id(),
            prediction = %assessment.label,
            probability = assessment.probability.value(),
            "Risk assessed"
        );

        // 4. Persist; failure is reported, not propagated
        let save = match self.audit_log.append(&record).await {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                tracing::error!(
                    submission_id = %record.submission_id(),
                    error = %err,
                    "Failed to append submission to audit log"
                );
                SaveOutcome::Failed(format!("Failed to save patient data: {}", err))
            }
        };

        Ok(SubmitAssessmentResult { record, save })
    }
}
