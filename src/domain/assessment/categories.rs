//! Categorical clinical fields.
//!
//! Each field is a closed enumeration whose human-readable label maps to
//! exactly one integer code. The UI and the audit log only ever see labels;
//! codes are produced when the feature vector is assembled.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Declares a categorical field with its label/code lookup table.
///
/// Generates `FIELD`, `TITLE`, `ALL`, `code()`, `label()`, `from_code()`,
/// `from_label()`, `Display`, and label-based serde impls.
macro_rules! categorical_field {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            title: $title:literal,
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Form field key.
            pub const FIELD: &'static str = $field;

            /// Display title shown next to the input.
            pub const TITLE: &'static str = $title;

            /// Every option in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric code the model was trained on.
            pub fn code(&self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_code(code: u8) -> Result<Self, ValidationError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(ValidationError::unknown_option($field, other.to_string())),
                }
            }

            pub fn from_label(label: &str) -> Result<Self, ValidationError> {
                let label = label.trim();
                if label.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label() == label)
                    .ok_or_else(|| ValidationError::unknown_option($field, label))
            }

            /// Labels in presentation order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|option| option.label()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                $name::from_label(&label).map_err(de::Error::custom)
            }
        }
    };
}

categorical_field! {
    /// Biological sex.
    Sex {
        field: "sex",
        title: "Sex",
        Male => (1, "Male"),
        Female => (0, "Female"),
    }
}

categorical_field! {
    /// Chest pain category.
    ChestPainType {
        field: "chest_pain_type",
        title: "Chest Pain Type",
        Asymptomatic => (0, "0 - Asymptomatic"),
        TypicalAngina => (1, "1 - Typical Angina"),
        AtypicalAngina => (2, "2 - Atypical Angina"),
        NonAnginalPain => (3, "3 - Non-anginal Pain"),
    }
}

categorical_field! {
    /// Fasting blood sugar above 120 mg/dl.
    FastingBloodSugar {
        field: "fasting_blood_sugar",
        title: "Fasting Blood Sugar > 120 mg/dl",
        No => (0, "No"),
        Yes => (1, "Yes"),
    }
}

categorical_field! {
    /// Resting electrocardiogram result.
    RestingEcg {
        field: "rest_ecg",
        title: "Resting ECG Results",
        Normal => (0, "0 - Normal"),
        StTWaveAbnormality => (1, "1 - ST-T Wave Abnormality"),
        LeftVentricularHypertrophy => (2, "2 - Left Ventricular Hypertrophy"),
    }
}

categorical_field! {
    /// Angina induced by exercise.
    ExerciseAngina {
        field: "exercise_angina",
        title: "Exercise Induced Angina",
        No => (0, "No"),
        Yes => (1, "Yes"),
    }
}

categorical_field! {
    /// Slope of the peak exercise ST segment.
    StSlope {
        field: "slope",
        title: "Slope of Peak Exercise ST Segment",
        Upsloping => (0, "0 - Upsloping"),
        Flat => (1, "1 - Flat"),
        Downsloping => (2, "2 - Downsloping"),
    }
}

categorical_field! {
    /// Number of major vessels colored by fluoroscopy.
    MajorVessels {
        field: "major_vessels",
        title: "Number of Major Vessels (0-3)",
        Zero => (0, "0"),
        One => (1, "1"),
        Two => (2, "2"),
        Three => (3, "3"),
    }
}

categorical_field! {
    /// Thalassemia category.
    Thalassemia {
        field: "thalassemia",
        title: "Thalassemia",
        Normal => (1, "1 - Normal"),
        FixedDefect => (2, "2 - Fixed Defect"),
        ReversibleDefect => (3, "3 - Reversible Defect"),
    }
}
