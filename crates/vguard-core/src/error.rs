//! Error taxonomy for the string validators and the URL guard.
//!
//! Each component has a closed set of failure kinds. The kind is what callers
//! branch on; the message is human-readable and meant for display only.

use thiserror::Error;

/// Which rule a string validator rejected the input on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Value was not a string (only reachable from a JSON boundary).
    WrongType,
    /// Value was empty or whitespace-only.
    Required,
    TooShort,
    TooLong,
    /// Value does not have the expected syntax (e.g. email).
    InvalidFormat,
    /// Password lacks a letter or a digit.
    MissingComplexity,
    /// Token carries injection or log-forging indicators.
    DangerousCharacters,
    /// Two values that must be equal differ.
    Mismatch,
}

/// Rejection from one of the string validators in [`crate::input`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which SSRF rule a URL was rejected on, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlErrorKind {
    /// Not an absolute URL, or no host.
    InvalidFormat,
    /// Scheme other than `https` while HTTPS is required.
    ProtocolNotAllowed,
    /// `localhost`, loopback or unspecified address literal.
    InternalNetworkBlocked,
    /// RFC 1918 IPv4 address.
    PrivateIpBlocked,
    /// Any IP literal while domain names are required.
    IpAddressNotAllowed,
    /// Host is not on the allowlist.
    DomainNotAllowed,
}

impl UrlErrorKind {
    /// Fixed message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            UrlErrorKind::InvalidFormat => "Invalid URL format",
            UrlErrorKind::ProtocolNotAllowed => "URL must use HTTPS protocol",
            UrlErrorKind::InternalNetworkBlocked => "Internal network addresses are not allowed",
            UrlErrorKind::PrivateIpBlocked => "Private IP addresses are not allowed",
            UrlErrorKind::IpAddressNotAllowed => "URL must be a domain name, not an IP address",
            UrlErrorKind::DomainNotAllowed => "URL must be from an allowed domain",
        }
    }
}

/// Rejection from [`crate::url_guard::validate_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct UrlValidationError {
    kind: UrlErrorKind,
}

impl UrlValidationError {
    pub(crate) fn new(kind: UrlErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> UrlErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = ValidationError::new(ValidationErrorKind::Required, "email is required");
        assert_eq!(err.kind(), ValidationErrorKind::Required);
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn url_error_display_matches_kind_message() {
        let err = UrlValidationError::new(UrlErrorKind::PrivateIpBlocked);
        assert_eq!(err.to_string(), "Private IP addresses are not allowed");
        assert_eq!(err.message(), UrlErrorKind::PrivateIpBlocked.message());
    }
}
