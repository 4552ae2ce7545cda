//! Email syntax pre-check.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, ValidationErrorKind};

/// Emails longer than this are rejected before any pattern matching.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// `local@domain.tld` with no whitespace and no second `@` in either part.
///
/// The `regex` crate compiles this to a finite automaton, so matching is
/// linear in the input regardless of how the input is crafted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid constant regex")
});

/// Pattern check alone, without the length bound.
pub(crate) fn matches_email_pattern(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates the syntactic shape of an email address.
///
/// This only rejects obviously malformed input; deliverability and uniqueness
/// are checked by whoever owns the account store.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let len = email.chars().count();
    if len > MAX_EMAIL_LENGTH {
        tracing::debug!(len, "email rejected: too long");
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            "Email address too long",
        ));
    }

    if !matches_email_pattern(email) {
        tracing::debug!(len, "email rejected: invalid format");
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            "Invalid email format",
        ));
    }

    Ok(())
}
