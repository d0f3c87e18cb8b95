//! Heart Risk server binary.
//!
//! Loads configuration, initializes tracing, loads the model artifact once
//! and serves the assessment page and API until Ctrl-C.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use heart_risk::adapters::audit::CsvAuditLog;
use heart_risk::adapters::http::{self, AssessmentAppState};
use heart_risk::adapters::model::LogisticPipelineModel;
use heart_risk::application::ModelStatus;
use heart_risk::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let model = ModelStatus::from_load_result(LogisticPipelineModel::load(
        config.model.artifact_path(),
    ));
    match &model {
        ModelStatus::Ready(model) => tracing::info!(
            path = %config.model.artifact_path().display(),
            model = %model.describe(),
            "Model loaded"
        ),
        ModelStatus::Unavailable(err) => tracing::error!(
            path = %config.model.artifact_path().display(),
            error = %err,
            "Model unavailable; serving startup error page"
        ),
    }

    let audit_log = Arc::new(CsvAuditLog::new(config.audit_log.path()));
    tracing::info!(path = %audit_log.path().display(), "Audit log configured");

    let mut app = http::app(AssessmentAppState::new(model, audit_log))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let origins = config
        .server
        .allowed_origins()
        .into_iter()
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
