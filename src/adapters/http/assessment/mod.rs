//! HTTP adapter for the assessment page and API.
//!
//! - `GET /` - Interactive page with the form
//! - `POST /predict` - Form submission (urlencoded)
//! - `GET /api/form` - Form schema
//! - `POST /api/assessments` - JSON assessment
//! - `GET /health` - Liveness and model readiness

pub mod dto;
pub mod handlers;
pub mod page;
pub mod routes;

pub use dto::{AssessmentRequest, AssessmentResponse, ErrorResponse, FieldValue, HealthResponse};
pub use handlers::AssessmentAppState;
pub use routes::assessment_router;
