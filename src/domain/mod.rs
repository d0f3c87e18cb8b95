//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assessment` - Patient inputs, feature encoding and risk outcomes

pub mod assessment;
pub mod foundation;
