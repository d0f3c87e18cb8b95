//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' has no option '{value}'")]
    UnknownOption { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(
        field: impl Into<String>,
        min: impl Into<f64>,
        max: impl Into<f64>,
        actual: impl Into<f64>,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min: min.into(),
            max: max.into(),
            actual: actual.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown option error for a closed enumeration.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::UnknownOption { field, .. } => field,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::UnknownOption { .. } => ErrorCode::UnknownOption,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    UnknownOption,

    // Inference errors
    ModelUnavailable,
    PredictionFailed,
}

impl ErrorCode {
    /// True for codes caused by user input rather than the system.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat
                | ErrorCode::UnknownOption
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::UnknownOption => "UNKNOWN_OPTION",
            ErrorCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ErrorCode::PredictionFailed => "PREDICTION_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("age");
        assert_eq!(format!("{}", err), "Field 'age' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("age", 1, 120, 0);
        assert_eq!(
            format!("{}", err),
            "Field 'age' must be between 1 and 120, got 0"
        );
    }

    #[test]
    fn validation_error_out_of_range_keeps_fractions() {
        let err = ValidationError::out_of_range("oldpeak", 0.0, 6.0, 6.5);
        assert_eq!(
            format!("{}", err),
            "Field 'oldpeak' must be between 0 and 6, got 6.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("cholesterol", "not a whole number");
        assert_eq!(
            format!("{}", err),
            "Field 'cholesterol' has invalid format: not a whole number"
        );
    }

    #[test]
    fn validation_error_reports_field_and_code() {
        let err = ValidationError::unknown_option("sex", "Other");
        assert_eq!(err.field(), "sex");
        assert_eq!(err.code(), ErrorCode::UnknownOption);
        assert!(err.code().is_input_error());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ModelUnavailable), "MODEL_UNAVAILABLE");
        assert_eq!(format!("{}", ErrorCode::PredictionFailed), "PREDICTION_FAILED");
        assert!(!ErrorCode::ModelUnavailable.is_input_error());
    }
}
