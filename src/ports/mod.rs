//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiskModel` - Pre-trained classifier loaded from an artifact
//! - `AuditLog` - Append-only record of submissions

mod audit_log;
mod risk_model;

pub use audit_log::{AuditLog, AuditLogError, AUDIT_COLUMNS};
pub use risk_model::{ModelError, ModelLoadError, RiskModel};
