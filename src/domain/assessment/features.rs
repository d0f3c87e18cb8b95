//! Fixed-order numeric encoding passed to the model.

use serde::Serialize;

use super::inputs::PatientInputs;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 13;

/// Feature names in the exact order the model was trained on.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// The encoded feature vector for a single patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Encodes validated inputs in training order.
    pub fn from_inputs(inputs: &PatientInputs) -> Self {
        Self([
            f64::from(inputs.age.value()),
            f64::from(inputs.sex.code()),
            f64::from(inputs.chest_pain_type.code()),
            f64::from(inputs.resting_bp.value()),
            f64::from(inputs.cholesterol.value()),
            f64::from(inputs.fasting_blood_sugar.code()),
            f64::from(inputs.rest_ecg.code()),
            f64::from(inputs.max_heart_rate.value()),
            f64::from(inputs.exercise_angina.code()),
            inputs.oldpeak.value(),
            f64::from(inputs.slope.code()),
            f64::from(inputs.major_vessels.code()),
            f64::from(inputs.thalassemia.code()),
        ])
    }

    /// Wraps pre-encoded values. Used by model adapters and tests.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Returns the value of a feature by its training name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_ORDER
            .iter()
            .position(|feature| *feature == name)
            .map(|index| self.0[index])
    }

    /// Name/value pairs in training order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_ORDER.iter().copied().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::categories::{
        ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex, StSlope,
        Thalassemia,
    };
    use crate::domain::assessment::inputs::fixtures::patient_inputs;
    use crate::domain::assessment::measurements::{
        Age, Cholesterol, MaxHeartRate, RestingBloodPressure, StDepression,
    };
    use proptest::prelude::*;

    #[test]
    fn fixture_encodes_in_training_order() {
        let vector = FeatureVector::from_inputs(&patient_inputs());
        assert_eq!(
            vector.values(),
            &[63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn get_reads_by_feature_name() {
        let vector = FeatureVector::from_inputs(&patient_inputs());
        assert_eq!(vector.get("thalach"), Some(150.0));
        assert_eq!(vector.get("thal"), Some(1.0));
        assert_eq!(vector.get("bmi"), None);
    }

    #[test]
    fn named_pairs_follow_feature_order() {
        let vector = FeatureVector::from_inputs(&patient_inputs());
        let names: Vec<_> = vector.named().map(|(name, _)| name).collect();
        assert_eq!(names, FEATURE_ORDER.to_vec());
    }

    fn any_inputs() -> impl Strategy<Value = PatientInputs> {
        (
            (Age::MIN..=Age::MAX, RestingBloodPressure::MIN..=RestingBloodPressure::MAX),
            (Cholesterol::MIN..=Cholesterol::MAX, MaxHeartRate::MIN..=MaxHeartRate::MAX),
            0u32..=60,
            (
                prop::sample::select(Sex::ALL),
                prop::sample::select(ChestPainType::ALL),
                prop::sample::select(FastingBloodSugar::ALL),
                prop::sample::select(RestingEcg::ALL),
            ),
            (
                prop::sample::select(ExerciseAngina::ALL),
                prop::sample::select(StSlope::ALL),
                prop::sample::select(MajorVessels::ALL),
                prop::sample::select(Thalassemia::ALL),
            ),
        )
            .prop_map(
                |((age, bp), (chol, hr), tenths, (sex, cp, fbs, ecg), (exang, slope, ca, thal))| {
                    PatientInputs {
                        age: Age::try_new(age).unwrap(),
                        sex,
                        chest_pain_type: cp,
                        resting_bp: RestingBloodPressure::try_new(bp).unwrap(),
                        cholesterol: Cholesterol::try_new(chol).unwrap(),
                        fasting_blood_sugar: fbs,
                        rest_ecg: ecg,
                        max_heart_rate: MaxHeartRate::try_new(hr).unwrap(),
                        exercise_angina: exang,
                        oldpeak: StDepression::try_new(f64::from(tenths) / 10.0).unwrap(),
                        slope,
                        major_vessels: ca,
                        thalassemia: thal,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn every_valid_input_encodes_thirteen_ordered_features(inputs in any_inputs()) {
            let vector = FeatureVector::from_inputs(&inputs);
            prop_assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
            prop_assert_eq!(vector.get("age"), Some(f64::from(inputs.age.value())));
            prop_assert_eq!(vector.get("sex"), Some(f64::from(inputs.sex.code())));
            prop_assert_eq!(vector.get("cp"), Some(f64::from(inputs.chest_pain_type.code())));
            prop_assert_eq!(vector.get("trestbps"), Some(f64::from(inputs.resting_bp.value())));
            prop_assert_eq!(vector.get("chol"), Some(f64::from(inputs.cholesterol.value())));
            prop_assert_eq!(vector.get("fbs"), Some(f64::from(inputs.fasting_blood_sugar.code())));
            prop_assert_eq!(vector.get("restecg"), Some(f64::from(inputs.rest_ecg.code())));
            prop_assert_eq!(vector.get("thalach"), Some(f64::from(inputs.max_heart_rate.value())));
            prop_assert_eq!(vector.get("exang"), Some(f64::from(inputs.exercise_angina.code())));
            prop_assert_eq!(vector.get("oldpeak"), Some(inputs.oldpeak.value()));
            prop_assert_eq!(vector.get("slope"), Some(f64::from(inputs.slope.code())));
            prop_assert_eq!(vector.get("ca"), Some(f64::from(inputs.major_vessels.code())));
            prop_assert_eq!(vector.get("thal"), Some(f64::from(inputs.thalassemia.code())));
        }

        #[test]
        fn encoding_survives_the_form_round_trip(inputs in any_inputs()) {
            let reparsed = PatientInputs::parse(&inputs.to_raw()).unwrap();
            prop_assert_eq!(FeatureVector::from_inputs(&reparsed), FeatureVector::from_inputs(&inputs));
        }
    }
}
