//! URL scheme screening and identifier format checks.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Schemes accepted by [`is_valid_url`] when the caller has no list of its own.
pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https"];

/// Schemes that execute or inline content when used in `href`/`src`.
const SCRIPT_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern is a valid constant regex")
});

/// Returns an empty string for `javascript:`, `data:` and `vbscript:` URLs
/// (ignoring case and surrounding whitespace) and the input otherwise.
///
/// This is for links rendered back to users. It is not an SSRF check; use
/// [`crate::url_guard::validate_url`] before fetching anything.
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim().to_lowercase();
    if SCRIPT_SCHEMES.iter().any(|s| trimmed.starts_with(s)) {
        tracing::debug!("stripped script-scheme url");
        return String::new();
    }
    url.to_string()
}

/// True if `url` parses as an absolute URL whose scheme is in `allowed_schemes`.
pub fn is_valid_url(url: &str, allowed_schemes: &[&str]) -> bool {
    Url::parse(url).is_ok_and(|parsed| allowed_schemes.contains(&parsed.scheme()))
}

/// True for an RFC 4122 UUID (versions 1-5) in canonical hyphenated form.
pub fn is_valid_uuid(s: &str) -> bool {
    UUID_REGEX.is_match(s)
}
