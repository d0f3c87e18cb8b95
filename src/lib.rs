//! Heart Risk - Heart disease risk assessment service
//!
//! Collects thirteen clinical measurements through a single form, runs them
//! through a pre-trained classifier loaded at startup, shows a high/low risk
//! label with its probability, and appends every submission to a CSV log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
