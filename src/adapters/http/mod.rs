//! HTTP adapters - page and REST API implementations.

pub mod assessment;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use assessment::{assessment_router, AssessmentAppState};

/// Builds the application router with request tracing.
///
/// CORS and timeouts depend on configuration and are layered on by the binary.
pub fn app(state: AssessmentAppState) -> Router {
    assessment_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
