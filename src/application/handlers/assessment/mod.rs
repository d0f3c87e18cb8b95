//! Assessment command and query handlers.

mod get_form_schema;
mod invoke_model;
mod model_status;
mod submit_assessment;

pub use get_form_schema::{FormView, GetFormSchemaHandler, GetFormSchemaQuery};
pub use invoke_model::invoke_model;
pub use model_status::ModelStatus;
pub use submit_assessment::{
    SaveOutcome, SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
