//! Password-reset token pre-check.

use crate::error::{ValidationError, ValidationErrorKind};

/// Tokens shorter than this cannot have come from the reset mailer.
pub const MIN_RESET_TOKEN_LENGTH: usize = 16;

/// Characters that indicate markup, quoting, statement or log injection.
/// This is a denylist, not a charset: any other token format is accepted.
const DANGEROUS_CHARS: &[char] = &['<', '>', '"', '\'', ';', '\0'];

/// Validates the shape of a password-reset token before it is looked up.
pub fn validate_reset_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        tracing::debug!("reset token rejected: empty");
        return Err(ValidationError::new(
            ValidationErrorKind::Required,
            "Reset token is required",
        ));
    }

    if token.chars().count() < MIN_RESET_TOKEN_LENGTH {
        tracing::debug!("reset token rejected: too short");
        return Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            "Invalid reset token format",
        ));
    }

    if let Some(c) = token.chars().find(|c| DANGEROUS_CHARS.contains(c)) {
        tracing::debug!(ch = ?c, "reset token rejected: dangerous character");
        return Err(ValidationError::new(
            ValidationErrorKind::DangerousCharacters,
            "Invalid characters in reset token",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(token: &str) -> Option<ValidationErrorKind> {
        validate_reset_token(token).err().map(|e| e.kind())
    }

    #[test]
    fn accepts_plain_token() {
        assert_eq!(kind("validtoken1234567890"), None);
        assert_eq!(kind("a1b2-c3d4_e5f6.g7h8+/="), None);
    }

    #[test]
    fn empty_and_whitespace_are_required() {
        assert_eq!(kind(""), Some(ValidationErrorKind::Required));
        assert_eq!(kind("   "), Some(ValidationErrorKind::Required));
        assert_eq!(kind("\t\n"), Some(ValidationErrorKind::Required));
    }

    #[test]
    fn short_token() {
        let err = validate_reset_token("short").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::TooShort);
        assert_eq!(err.to_string(), "Invalid reset token format");
    }

    #[test]
    fn dangerous_characters() {
        for token in [
            "token<script>alert(1)</script>",
            "token;DROP TABLE",
            "token\0injection-xx",
            "token\"injection-xx",
            "token'injection-xx",
            "0123456789abcdef>",
        ] {
            assert_eq!(
                kind(token),
                Some(ValidationErrorKind::DangerousCharacters),
                "{token:?}"
            );
        }
    }

    #[test]
    fn length_is_checked_before_characters() {
        // 15 chars with a NUL: the length rule fires first.
        assert_eq!(kind("token\0injection"), Some(ValidationErrorKind::TooShort));
    }
}
