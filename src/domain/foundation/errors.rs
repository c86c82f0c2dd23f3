//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be within [0.0, 1.0], got {actual}")]
    OutOfUnitInterval { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of unit interval validation error.
    pub fn out_of_unit_interval(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfUnitInterval {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("posting_text");
        assert_eq!(format!("{}", err), "Field 'posting_text' cannot be empty");
    }

    #[test]
    fn out_of_unit_interval_displays_correctly() {
        let err = ValidationError::out_of_unit_interval("score", 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be within [0.0, 1.0], got 1.5"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("education_level", "unknown ladder rung");
        assert_eq!(
            format!("{}", err),
            "Field 'education_level' has invalid format: unknown ladder rung"
        );
    }
}
