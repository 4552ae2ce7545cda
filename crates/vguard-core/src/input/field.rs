//! Generic field checks: presence, equality, and length bounds.

use serde_json::Value;

use crate::error::{ValidationError, ValidationErrorKind};

/// Default lower bound for [`validate_length_default`].
pub const DEFAULT_MIN_LENGTH: usize = 0;
/// Default upper bound for [`validate_length_default`].
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Fails with `Required` if `value` is empty after trimming whitespace.
pub fn require_non_empty(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        tracing::debug!(field = field_name, "field rejected: empty");
        return Err(ValidationError::new(
            ValidationErrorKind::Required,
            format!("{field_name} is required"),
        ));
    }
    Ok(())
}

/// Same as [`require_non_empty`] for a value taken straight from a JSON body,
/// where the field may hold a number, object, or `null` instead of a string.
pub fn require_non_empty_string(value: &Value, field_name: &str) -> Result<(), ValidationError> {
    match value {
        Value::String(s) => require_non_empty(s, field_name),
        _ => {
            tracing::debug!(field = field_name, "field rejected: not a string");
            Err(ValidationError::new(
                ValidationErrorKind::WrongType,
                format!("{field_name} must be a string"),
            ))
        }
    }
}

/// Fails with `Mismatch` unless the two values are byte-for-byte equal
/// (e.g. a password and its confirmation).
pub fn require_match(first: &str, second: &str, field_name: &str) -> Result<(), ValidationError> {
    if first != second {
        tracing::debug!(field = field_name, "field rejected: values differ");
        return Err(ValidationError::new(
            ValidationErrorKind::Mismatch,
            format!("{field_name} values do not match"),
        ));
    }
    Ok(())
}

/// Checks that `input` has between `min` and `max` characters, inclusive.
pub fn validate_length(
    input: &str,
    field_name: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = input.chars().count();

    if len < min {
        tracing::debug!(field = field_name, len, min, "field rejected: too short");
        return Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            format!("{field_name} must be at least {min} characters"),
        ));
    }

    if len > max {
        tracing::debug!(field = field_name, len, max, "field rejected: too long");
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            format!("{field_name} must be at most {max} characters"),
        ));
    }

    Ok(())
}

/// [`validate_length`] with bounds `0..=1000`.
pub fn validate_length_default(input: &str, field_name: &str) -> Result<(), ValidationError> {
    validate_length(input, field_name, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
}
