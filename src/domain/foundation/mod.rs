//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types shared by the
//! assessment domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SubmissionId;
pub use timestamp::Timestamp;
