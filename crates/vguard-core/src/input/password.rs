//! Password strength rules.

use crate::error::{ValidationError, ValidationErrorKind};

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in characters (bcrypt input limit).
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Validates a new password: 8 to 72 characters, with at least one ASCII
/// letter and one ASCII digit. No other character classes are required.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        tracing::debug!("password rejected: too short");
        return Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if len > MAX_PASSWORD_LENGTH {
        tracing::debug!(len, "password rejected: too long");
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            format!("Password too long (max {MAX_PASSWORD_LENGTH} characters for bcrypt)"),
        ));
    }

    let has_letter = password.bytes().any(|b| b.is_ascii_alphabetic());
    let has_digit = password.bytes().any(|b| b.is_ascii_digit());
    if !has_letter || !has_digit {
        tracing::debug!(has_letter, has_digit, "password rejected: missing complexity");
        return Err(ValidationError::new(
            ValidationErrorKind::MissingComplexity,
            "Password must contain both letters and numbers",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(password: &str) -> Option<ValidationErrorKind> {
        validate_password(password).err().map(|e| e.kind())
    }

    #[test]
    fn accepts_letters_and_digits() {
        assert_eq!(kind("Password123"), None);
        assert_eq!(kind("abc12345"), None);
        assert_eq!(kind("p4ssw0rd!#%"), None);
    }

    #[test]
    fn rejects_short() {
        let err = validate_password("short").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::TooShort);
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
        assert_eq!(kind("abc1234"), Some(ValidationErrorKind::TooShort));
    }

    #[test]
    fn rejects_missing_letter_or_digit() {
        assert_eq!(kind("12345678"), Some(ValidationErrorKind::MissingComplexity));
        assert_eq!(kind("onlyletters"), Some(ValidationErrorKind::MissingComplexity));
        // Non-ASCII letters do not count.
        assert_eq!(kind("ééééééé1"), Some(ValidationErrorKind::MissingComplexity));
    }

    #[test]
    fn bcrypt_limit() {
        let at_limit = format!("a1{}", "b".repeat(70));
        assert_eq!(at_limit.len(), 72);
        assert_eq!(kind(&at_limit), None);

        let over = format!("a1{}", "b".repeat(74));
        assert_eq!(over.len(), 76);
        let err = validate_password(&over).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::TooLong);
        assert!(err.to_string().starts_with("Password too long"));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 40 characters, 78 bytes.
        let multibyte = format!("a1{}", "é".repeat(38));
        assert_eq!(multibyte.chars().count(), 40);
        assert!(multibyte.len() > MAX_PASSWORD_LENGTH);
        assert_eq!(kind(&multibyte), None);

        let at_limit = format!("a1{}", "é".repeat(70));
        assert_eq!(kind(&at_limit), None);
        let over = format!("a1{}", "é".repeat(71));
        assert_eq!(kind(&over), Some(ValidationErrorKind::TooLong));
    }
}
