//! Route configuration for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_assessment, get_form, health, index, predict, AssessmentAppState};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `GET /` - Interactive page
/// - `POST /predict` - Form submission, re-renders the page with the result
/// - `GET /api/form` - Form fields and their domains
/// - `POST /api/assessments` - JSON assessment
/// - `GET /health` - Liveness and model readiness
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/api/form", get(get_form))
        .route("/api/assessments", post(create_assessment))
        .route("/health", get(health))
}
