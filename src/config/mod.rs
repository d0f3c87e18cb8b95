//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HEART_RISK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use heart_risk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Model artifact: {}", config.model.artifact_path().display());
//! ```

mod audit;
mod error;
mod model;
mod server;

pub use audit::AuditLogConfig;
pub use error::{ConfigError, ValidationError};
pub use model::ModelConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Pre-trained classifier artifact
    #[serde(default)]
    pub model: ModelConfig,

    /// Persisted submission log
    #[serde(default)]
    pub audit_log: AuditLogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HEART_RISK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HEART_RISK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HEART_RISK__MODEL__ARTIFACT_PATH=...` -> `model.artifact_path = ...`
    /// - `HEART_RISK__AUDIT_LOG__PATH=...` -> `audit_log.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEART_RISK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.model.validate()?;
        self.audit_log.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HEART_RISK__SERVER__PORT");
        env::remove_var("HEART_RISK__SERVER__ENVIRONMENT");
        env::remove_var("HEART_RISK__MODEL__ARTIFACT_PATH");
        env::remove_var("HEART_RISK__AUDIT_LOG__PATH");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.model.artifact_path(),
            Path::new("models/heart_disease_pipeline.json")
        );
        assert_eq!(config.audit_log.path(), Path::new("heart_predictions.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_paths_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEART_RISK__MODEL__ARTIFACT_PATH", "/srv/models/pipeline.json");
        env::set_var("HEART_RISK__AUDIT_LOG__PATH", "/srv/data/log.csv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.model.artifact_path(),
            Path::new("/srv/models/pipeline.json")
        );
        assert_eq!(config.audit_log.path(), Path::new("/srv/data/log.csv"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEART_RISK__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HEART_RISK__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_rejects_non_json_artifact() {
        let mut config = AppConfig::default();
        config.model.artifact_path = "heart_disease_pipeline.pkl".into();
        assert!(config.validate().is_err());
    }
}
