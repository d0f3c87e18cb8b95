//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    invoke_model, FormView, GetFormSchemaHandler, GetFormSchemaQuery, ModelStatus, SaveOutcome,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
