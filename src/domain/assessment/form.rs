//! Form layout: one bounded input per field.
//!
//! The schema is derived from the same measurement bounds and label tables
//! the validator uses, so the page and the API cannot drift from validation.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::categories::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex, StSlope,
    Thalassemia,
};
use super::inputs::RawPatientInputs;
use super::measurements::{Age, Cholesterol, MaxHeartRate, RestingBloodPressure, StDepression};

/// Input widget kind and its domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Integer { min: u16, max: u16 },
    Decimal { min: f64, max: f64, step: f64 },
    Choice { options: Vec<&'static str> },
}

/// One form input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    fn integer(key: &'static str, label: &'static str, min: u16, max: u16) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Integer { min, max },
        }
    }

    fn choice(key: &'static str, label: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Choice { options },
        }
    }

    /// Initial value: the lower bound for numbers, the first option for choices.
    pub fn default_value(&self) -> String {
        match &self.kind {
            FieldKind::Integer { min, .. } => min.to_string(),
            FieldKind::Decimal { min, .. } => format!("{:?}", min),
            FieldKind::Choice { options } => options.first().map(|o| o.to_string()).unwrap_or_default(),
        }
    }
}

/// The complete page form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSchema {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldSpec>,
}

static STANDARD_FORM: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    title: "Heart Disease Risk Prediction",
    subtitle: "Enter patient details to assess heart disease risk",
    submit_label: "Predict Risk",
    fields: vec![
        FieldSpec::integer(Age::FIELD, Age::TITLE, Age::MIN, Age::MAX),
        FieldSpec::choice(Sex::FIELD, Sex::TITLE, Sex::labels()),
        FieldSpec::choice(ChestPainType::FIELD, ChestPainType::TITLE, ChestPainType::labels()),
        FieldSpec::integer(
            RestingBloodPressure::FIELD,
            RestingBloodPressure::TITLE,
            RestingBloodPressure::MIN,
            RestingBloodPressure::MAX,
        ),
        FieldSpec::integer(
            Cholesterol::FIELD,
            Cholesterol::TITLE,
            Cholesterol::MIN,
            Cholesterol::MAX,
        ),
        FieldSpec::choice(
            FastingBloodSugar::FIELD,
            FastingBloodSugar::TITLE,
            FastingBloodSugar::labels(),
        ),
        FieldSpec::choice(RestingEcg::FIELD, RestingEcg::TITLE, RestingEcg::labels()),
        FieldSpec::integer(
            MaxHeartRate::FIELD,
            MaxHeartRate::TITLE,
            MaxHeartRate::MIN,
            MaxHeartRate::MAX,
        ),
        FieldSpec::choice(
            ExerciseAngina::FIELD,
            ExerciseAngina::TITLE,
            ExerciseAngina::labels(),
        ),
        FieldSpec {
            key: StDepression::FIELD,
            label: StDepression::TITLE,
            kind: FieldKind::Decimal {
                min: StDepression::MIN,
                max: StDepression::MAX,
                step: StDepression::STEP,
            },
        },
        FieldSpec::choice(StSlope::FIELD, StSlope::TITLE, StSlope::labels()),
        FieldSpec::choice(MajorVessels::FIELD, MajorVessels::TITLE, MajorVessels::labels()),
        FieldSpec::choice(Thalassemia::FIELD, Thalassemia::TITLE, Thalassemia::labels()),
    ],
});

impl FormSchema {
    /// The thirteen-field heart assessment form.
    pub fn standard() -> &'static FormSchema {
        &STANDARD_FORM
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Form state before the user has touched anything.
    pub fn initial_values(&self) -> RawPatientInputs {
        let value = |key: &str| {
            self.field(key)
                .map(FieldSpec::default_value)
                .unwrap_or_default()
        };
        RawPatientInputs {
            age: value(Age::FIELD),
            sex: value(Sex::FIELD),
            chest_pain_type: value(ChestPainType::FIELD),
            resting_bp: value(RestingBloodPressure::FIELD),
            cholesterol: value(Cholesterol::FIELD),
            fasting_blood_sugar: value(FastingBloodSugar::FIELD),
            rest_ecg: value(RestingEcg::FIELD),
            max_heart_rate: value(MaxHeartRate::FIELD),
            exercise_angina: value(ExerciseAngina::FIELD),
            oldpeak: value(StDepression::FIELD),
            slope: value(StSlope::FIELD),
            major_vessels: value(MajorVessels::FIELD),
            thalassemia: value(Thalassemia::FIELD),
        }
    }
}
