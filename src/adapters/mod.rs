//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - Risk model artifact loaders
//! - `audit` - Submission log writers
//! - `http` - Page and JSON API

pub mod audit;
pub mod http;
pub mod model;

pub use audit::{CsvAuditLog, InMemoryAuditLog};
pub use model::{FixedRiskModel, LogisticPipelineModel};
