//! Fixed policy for social-media link previews.

use std::sync::LazyLock;

use super::{validate_url, UrlValidationOptions};
use crate::error::UrlValidationError;

/// Platforms whose post URLs may be fetched for previews.
pub const SOCIAL_MEDIA_DOMAINS: &[&str] = &[
    "instagram.com",
    "tiktok.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "fb.com",
    "youtube.com",
    "youtu.be",
    "linkedin.com",
];

static SOCIAL_MEDIA_OPTIONS: LazyLock<UrlValidationOptions> = LazyLock::new(social_media_options);

/// All protections on, allowlist = [`SOCIAL_MEDIA_DOMAINS`].
pub fn social_media_options() -> UrlValidationOptions {
    UrlValidationOptions::default()
        .with_allowed_domains(SOCIAL_MEDIA_DOMAINS.iter().copied())
        .with_https_only(true)
        .with_block_internal_networks(true)
        .with_block_ip_addresses(true)
}

/// Validates a URL submitted for a social-media preview fetch.
pub fn validate_social_media_url(url: &str) -> Result<(), UrlValidationError> {
    validate_url(url, &SOCIAL_MEDIA_OPTIONS)
}
