//! Bounded numeric measurements.
//!
//! Each measurement rejects values outside its clinical domain at
//! construction, so anything that reaches the feature vector is in range.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Declares an integer measurement with inclusive bounds.
macro_rules! integer_measurement {
    (
        $(#[$meta:meta])*
        $name:ident {
            field: $field:literal,
            title: $title:literal,
            min: $min:literal,
            max: $max:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u16", into = "u16")]
        pub struct $name(u16);

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const TITLE: &'static str = $title;
            pub const MIN: u16 = $min;
            pub const MAX: u16 = $max;

            /// Creates the measurement, returning error if out of range.
            pub fn try_new(value: u16) -> Result<Self, ValidationError> {
                if !(Self::MIN..=Self::MAX).contains(&value) {
                    return Err(ValidationError::out_of_range(
                        Self::FIELD,
                        Self::MIN,
                        Self::MAX,
                        value,
                    ));
                }
                Ok(Self(value))
            }

            /// Parses form text as a whole number, then range-checks it.
            pub fn parse(text: &str) -> Result<Self, ValidationError> {
                let value = parse_whole_number(Self::FIELD, text)?;
                if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
                    return Err(ValidationError::OutOfRange {
                        field: Self::FIELD.to_string(),
                        min: f64::from(Self::MIN),
                        max: f64::from(Self::MAX),
                        actual: value as f64,
                    });
                }
                // In range, so it fits in u16.
                Self::try_new(value as u16)
            }

            pub fn value(&self) -> u16 {
                self.0
            }
        }

        impl TryFrom<u16> for $name {
            type Error = ValidationError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                Self::try_new(value)
            }
        }

        impl From<$name> for u16 {
            fn from(measurement: $name) -> u16 {
                measurement.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_measurement! {
    /// Age in years.
    Age {
        field: "age",
        title: "Age",
        min: 1,
        max: 120,
    }
}

integer_measurement! {
    /// Resting blood pressure in mm Hg.
    RestingBloodPressure {
        field: "resting_bp",
        title: "Resting Blood Pressure (mm Hg)",
        min: 80,
        max: 200,
    }
}

integer_measurement! {
    /// Serum cholesterol in mg/dl.
    Cholesterol {
        field: "cholesterol",
        title: "Cholesterol (mg/dl)",
        min: 100,
        max: 600,
    }
}

integer_measurement! {
    /// Maximum heart rate achieved during exercise.
    MaxHeartRate {
        field: "max_heart_rate",
        title: "Maximum Heart Rate Achieved",
        min: 60,
        max: 220,
    }
}

/// ST depression induced by exercise relative to rest ("oldpeak").
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StDepression(f64);

impl StDepression {
    pub const FIELD: &'static str = "oldpeak";
    pub const TITLE: &'static str = "ST Depression (Oldpeak)";
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 6.0;
    /// Input granularity offered by the form.
    pub const STEP: f64 = 0.1;

    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                Self::FIELD,
                "expected a finite number",
            ));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                Self::FIELD,
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field(Self::FIELD));
        }
        let value: f64 = text
            .parse()
            .map_err(|_| ValidationError::invalid_format(Self::FIELD, "expected a number"))?;
        Self::try_new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StDepression {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<StDepression> for f64 {
    fn from(measurement: StDepression) -> f64 {
        measurement.0
    }
}

impl fmt::Display for StDepression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

fn parse_whole_number(field: &'static str, text: &str) -> Result<i64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    text.parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(field, "expected a whole number"))
}
