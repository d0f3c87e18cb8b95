//! Risk model adapters.
//!
//! - `LogisticPipelineModel` - Loads the trained pipeline artifact from JSON
//! - `FixedRiskModel` - Deterministic model for tests and local runs

mod fixed;
mod logistic_pipeline;

pub use fixed::FixedRiskModel;
pub use logistic_pipeline::LogisticPipelineModel;
