//! Heart disease risk assessment domain.
//!
//! - `categories` - Closed label/code tables for categorical fields
//! - `measurements` - Range-checked numeric fields
//! - `inputs` - Raw form state and validated patient inputs
//! - `features` - Fixed-order feature vector for the model
//! - `outcome` - Risk label, probability and the per-submission record
//! - `form` - Form schema shared by the page and the API

mod categories;
mod errors;
mod features;
mod form;
mod inputs;
mod measurements;
mod outcome;

pub use categories::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex, StSlope,
    Thalassemia,
};
pub use errors::AssessmentError;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_ORDER};
pub use form::{FieldKind, FieldSpec, FormSchema};
pub use inputs::{PatientInputs, RawPatientInputs};
pub use measurements::{Age, Cholesterol, MaxHeartRate, RestingBloodPressure, StDepression};
pub use outcome::{PredictionRecord, RiskAssessment, RiskLabel, RiskProbability};

#[cfg(test)]
pub(crate) use inputs::fixtures;
