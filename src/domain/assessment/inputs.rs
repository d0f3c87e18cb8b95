//! Patient inputs as collected by the form and as validated for inference.

use serde::{Deserialize, Serialize};

use super::categories::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex, StSlope,
    Thalassemia,
};
use super::measurements::{Age, Cholesterol, MaxHeartRate, RestingBloodPressure, StDepression};
use crate::domain::foundation::ValidationError;

/// Unvalidated form state: one text value per field, categories as labels.
///
/// This is what the page keeps between renders. Nothing is encoded here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPatientInputs {
    pub age: String,
    pub sex: String,
    pub chest_pain_type: String,
    pub resting_bp: String,
    pub cholesterol: String,
    pub fasting_blood_sugar: String,
    pub rest_ecg: String,
    pub max_heart_rate: String,
    pub exercise_angina: String,
    pub oldpeak: String,
    pub slope: String,
    pub major_vessels: String,
    pub thalassemia: String,
}

impl RawPatientInputs {
    /// Looks up a field's current text by its form key.
    pub fn value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "age" => &self.age,
            "sex" => &self.sex,
            "chest_pain_type" => &self.chest_pain_type,
            "resting_bp" => &self.resting_bp,
            "cholesterol" => &self.cholesterol,
            "fasting_blood_sugar" => &self.fasting_blood_sugar,
            "rest_ecg" => &self.rest_ecg,
            "max_heart_rate" => &self.max_heart_rate,
            "exercise_angina" => &self.exercise_angina,
            "oldpeak" => &self.oldpeak,
            "slope" => &self.slope,
            "major_vessels" => &self.major_vessels,
            "thalassemia" => &self.thalassemia,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// Thirteen validated clinical measurements for one patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInputs {
    pub age: Age,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    pub resting_bp: RestingBloodPressure,
    pub cholesterol: Cholesterol,
    pub fasting_blood_sugar: FastingBloodSugar,
    pub rest_ecg: RestingEcg,
    pub max_heart_rate: MaxHeartRate,
    pub exercise_angina: ExerciseAngina,
    pub oldpeak: StDepression,
    pub slope: StSlope,
    pub major_vessels: MajorVessels,
    pub thalassemia: Thalassemia,
}

impl PatientInputs {
    /// Validates every field of the raw form state.
    ///
    /// Fields are checked in form order and the first failure is returned.
    pub fn parse(raw: &RawPatientInputs) -> Result<Self, ValidationError> {
        Ok(Self {
            age: Age::parse(&raw.age)?,
            sex: Sex::from_label(&raw.sex)?,
            chest_pain_type: ChestPainType::from_label(&raw.chest_pain_type)?,
            resting_bp: RestingBloodPressure::parse(&raw.resting_bp)?,
            cholesterol: Cholesterol::parse(&raw.cholesterol)?,
            fasting_blood_sugar: FastingBloodSugar::from_label(&raw.fasting_blood_sugar)?,
            rest_ecg: RestingEcg::from_label(&raw.rest_ecg)?,
            max_heart_rate: MaxHeartRate::parse(&raw.max_heart_rate)?,
            exercise_angina: ExerciseAngina::from_label(&raw.exercise_angina)?,
            oldpeak: StDepression::parse(&raw.oldpeak)?,
            slope: StSlope::from_label(&raw.slope)?,
            major_vessels: MajorVessels::from_label(&raw.major_vessels)?,
            thalassemia: Thalassemia::from_label(&raw.thalassemia)?,
        })
    }

    /// Converts back to form state, with labels for categories.
    pub fn to_raw(&self) -> RawPatientInputs {
        RawPatientInputs {
            age: self.age.to_string(),
            sex: self.sex.label().to_string(),
            chest_pain_type: self.chest_pain_type.label().to_string(),
            resting_bp: self.resting_bp.to_string(),
            cholesterol: self.cholesterol.to_string(),
            fasting_blood_sugar: self.fasting_blood_sugar.label().to_string(),
            rest_ecg: self.rest_ecg.label().to_string(),
            max_heart_rate: self.max_heart_rate.to_string(),
            exercise_angina: self.exercise_angina.label().to_string(),
            oldpeak: self.oldpeak.to_string(),
            slope: self.slope.label().to_string(),
            major_vessels: self.major_vessels.label().to_string(),
            thalassemia: self.thalassemia.label().to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A complete, valid form submission.
    pub fn raw_inputs() -> RawPatientInputs {
        RawPatientInputs {
            age: "63".to_string(),
            sex: "Male".to_string(),
            chest_pain_type: "3 - Non-anginal Pain".to_string(),
            resting_bp: "145".to_string(),
            cholesterol: "233".to_string(),
            fasting_blood_sugar: "Yes".to_string(),
            rest_ecg: "0 - Normal".to_string(),
            max_heart_rate: "150".to_string(),
            exercise_angina: "No".to_string(),
            oldpeak: "2.3".to_string(),
            slope: "0 - Upsloping".to_string(),
            major_vessels: "0".to_string(),
            thalassemia: "1 - Normal".to_string(),
        }
    }

    pub fn patient_inputs() -> PatientInputs {
        PatientInputs::parse(&raw_inputs()).expect("fixture must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::raw_inputs;
    use super::*;

    #[test]
    fn parse_accepts_complete_form() {
        let inputs = PatientInputs::parse(&raw_inputs()).unwrap();
        assert_eq!(inputs.age.value(), 63);
        assert_eq!(inputs.sex, Sex::Male);
        assert_eq!(inputs.chest_pain_type, ChestPainType::NonAnginalPain);
        assert_eq!(inputs.oldpeak.value(), 2.3);
        assert_eq!(inputs.thalassemia, Thalassemia::Normal);
    }

    #[test]
    fn parse_rejects_out_of_domain_age() {
        let mut raw = raw_inputs();
        raw.age = "0".to_string();
        let err = PatientInputs::parse(&raw).unwrap_err();
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn parse_rejects_unknown_category_label() {
        let mut raw = raw_inputs();
        raw.rest_ecg = "3 - Something Else".to_string();
        let err = PatientInputs::parse(&raw).unwrap_err();
        assert_eq!(err.field(), "rest_ecg");
    }

    #[test]
    fn parse_reports_missing_fields() {
        let err = PatientInputs::parse(&RawPatientInputs::default()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
        assert_eq!(err.field(), "age");
    }

    #[test]
    fn to_raw_restores_labels() {
        let raw = raw_inputs();
        let inputs = PatientInputs::parse(&raw).unwrap();
        assert_eq!(inputs.to_raw(), raw);
    }

    #[test]
    fn value_looks_up_by_form_key() {
        let raw = raw_inputs();
        assert_eq!(raw.value("thalassemia"), Some("1 - Normal"));
        assert_eq!(raw.value("oldpeak"), Some("2.3"));
        assert_eq!(raw.value("unknown"), None);
    }

    #[test]
    fn raw_inputs_deserialize_with_missing_fields() {
        let raw: RawPatientInputs = serde_json::from_str(r#"{"age": "40"}"#).unwrap();
        assert_eq!(raw.age, "40");
        assert!(raw.sex.is_empty());
    }
}
