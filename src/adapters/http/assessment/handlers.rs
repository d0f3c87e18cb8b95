//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::{
    GetFormSchemaHandler, GetFormSchemaQuery, ModelStatus, SaveOutcome, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult,
};
use crate::domain::assessment::{AssessmentError, FormSchema, RawPatientInputs};
use crate::domain::foundation::ErrorCode;
use crate::ports::{AuditLog, ModelLoadError};

use super::dto::{AssessmentRequest, AssessmentResponse, ErrorResponse, HealthResponse};
use super::page::{self, Banner};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned for each request; the model handle and the audit log are shared.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub model: ModelStatus,
    pub audit_log: Arc<dyn AuditLog>,
}

impl AssessmentAppState {
    pub fn new(model: ModelStatus, audit_log: Arc<dyn AuditLog>) -> Self {
        Self { model, audit_log }
    }

    /// Create handlers on demand from the shared state.
    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.model.clone(), self.audit_log.clone())
    }

    pub fn get_form_schema_handler(&self) -> GetFormSchemaHandler {
        GetFormSchemaHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Page handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Render the empty form
pub async fn index(State(state): State<AssessmentAppState>) -> Response {
    if let Some(err) = state.model.startup_error() {
        return startup_error_page(err);
    }

    let view = state
        .get_form_schema_handler()
        .handle(GetFormSchemaQuery::default());
    Html(page::render_form(view.schema, &view.values, &[])).into_response()
}

/// POST /predict - Assess the submitted form and re-render it
pub async fn predict(
    State(state): State<AssessmentAppState>,
    Form(inputs): Form<RawPatientInputs>,
) -> Response {
    if let Some(err) = state.model.startup_error() {
        return startup_error_page(err);
    }

    let cmd = SubmitAssessmentCommand {
        inputs: inputs.clone(),
    };
    let outcome = state.submit_assessment_handler().handle(cmd).await;

    let view = state.get_form_schema_handler().handle(GetFormSchemaQuery {
        previous: Some(inputs),
    });
    let (status, banners) = match &outcome {
        Ok(result) => (StatusCode::OK, result_banners(result)),
        Err(err) => (status_for(err.code()), vec![Banner::Error(err.message())]),
    };

    (status, Html(page::render_form(view.schema, &view.values, &banners))).into_response()
}

/// The model never loaded: show the error in place of the form.
fn startup_error_page(err: &ModelLoadError) -> Response {
    let html = page::render_startup_error(FormSchema::standard(), err);
    (StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response()
}

fn result_banners(result: &SubmitAssessmentResult) -> Vec<Banner> {
    let assessment = result.record.assessment();
    let text = format!(
        "{}\n\nRisk Probability: {}",
        assessment.label.headline(),
        assessment.probability.display()
    );
    let mut banners = vec![if assessment.label.is_high_risk() {
        Banner::Error(text)
    } else {
        Banner::Success(text)
    }];
    banners.push(match &result.save {
        SaveOutcome::Saved => Banner::Info("Patient data saved successfully".to_string()),
        SaveOutcome::Failed(message) => Banner::Warning(message.clone()),
    });
    banners
}

// ════════════════════════════════════════════════════════════════════════════════
// JSON handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/form - Describe the form fields and their domains
pub async fn get_form(State(state): State<AssessmentAppState>) -> Json<&'static FormSchema> {
    let view = state
        .get_form_schema_handler()
        .handle(GetFormSchemaQuery::default());
    Json(view.schema)
}

/// POST /api/assessments - Assess one patient
pub async fn create_assessment(
    State(state): State<AssessmentAppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let cmd = SubmitAssessmentCommand { inputs: req.into() };
    match state.submit_assessment_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(AssessmentResponse::from(&result))).into_response(),
        Err(err) => handle_assessment_error(&err),
    }
}

/// GET /health - Liveness and model readiness
pub async fn health(State(state): State<AssessmentAppState>) -> Response {
    let response = HealthResponse {
        status: if state.model.is_ready() { "ok" } else { "degraded" },
        model_ready: state.model.is_ready(),
        model_error: state.model.startup_error().map(ToString::to_string),
    };
    let status = if response.model_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════════

/// Maps an error code to its HTTP status.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        code if code.is_input_error() => StatusCode::BAD_REQUEST,
        ErrorCode::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_assessment_error(error: &AssessmentError) -> Response {
    (status_for(error.code()), Json(ErrorResponse::from(error))).into_response()
}
