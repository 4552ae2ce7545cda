//! SSRF protection for outbound fetches of user-supplied URLs.
//!
//! Every server-side fetch of a URL that came from a user (link previews,
//! social embeds) must pass [`validate_url`] first and treat any error as
//! "do not fetch". The checks run in a fixed order and stop at the first
//! failure:
//!
//! 1. parse as an absolute URL
//! 2. scheme must be `https` (if `https_only`)
//! 3. host is extracted and lowercased
//! 4. internal literals (`localhost`, `127.0.0.1`, `::1`, `0.0.0.0`, `[::]`)
//! 5. RFC 1918 private IPv4 ranges
//! 6. any bare IP literal (if `block_ip_addresses`)
//! 7. allowlist with subdomain suffix matching
//!
//! Only the host takes part in any decision; path and query are ignored.
//!
//! # Known gaps
//!
//! Link-local `169.254.0.0/16` (cloud metadata endpoints), CGNAT
//! `100.64.0.0/10`, IPv6 `fc00::/7` / `fe80::/10`, and IPv4-mapped IPv6
//! addresses such as `[::ffff:7f00:1]` are not treated as internal. With the
//! default options they are still rejected by the bare-IP rule; callers that
//! turn `block_ip_addresses` off lose that protection.
//! Forcing domain names does not stop a domain that resolves to an internal
//! address; the fetcher must re-check the resolved address.

mod host;
mod social;

use url::Url;

use crate::error::{UrlErrorKind, UrlValidationError};
use crate::sanitize::sanitize_for_log;

pub use host::{classify_host, HostClass};
pub use social::{social_media_options, validate_social_media_url, SOCIAL_MEDIA_DOMAINS};

/// Policy for one [`validate_url`] call. The default enables every
/// protection and has no allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlValidationOptions {
    /// Lowercase domains without a leading dot. Empty disables the allowlist.
    pub allowed_domains: Vec<String>,
    pub https_only: bool,
    pub block_internal_networks: bool,
    /// Reject IP literals so that only DNS names can be fetched.
    pub block_ip_addresses: bool,
}

impl Default for UrlValidationOptions {
    fn default() -> Self {
        Self {
            allowed_domains: Vec::new(),
            https_only: true,
            block_internal_networks: true,
            block_ip_addresses: true,
        }
    }
}

impl UrlValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_https_only(mut self, https_only: bool) -> Self {
        self.https_only = https_only;
        self
    }

    pub fn with_block_internal_networks(mut self, block: bool) -> Self {
        self.block_internal_networks = block;
        self
    }

    pub fn with_block_ip_addresses(mut self, block: bool) -> Self {
        self.block_ip_addresses = block;
        self
    }

    fn is_allowed(&self, host: &str) -> bool {
        self.allowed_domains.iter().any(|domain| {
            host.strip_suffix(domain.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
        })
    }
}

/// Validates `url` against the SSRF policy in `options`.
pub fn validate_url(url: &str, options: &UrlValidationOptions) -> Result<(), UrlValidationError> {
    let parsed = Url::parse(url).map_err(|e| {
        tracing::debug!(error = %e, "url rejected: parse failure");
        UrlValidationError::new(UrlErrorKind::InvalidFormat)
    })?;

    if options.https_only && parsed.scheme() != "https" {
        return Err(reject(UrlErrorKind::ProtocolNotAllowed, parsed.scheme()));
    }

    // IPv6 hosts come back bracketed and in the parser's canonical hex form,
    // so IPv4-mapped addresses never carry dots here.
    let hostname = match parsed.host_str() {
        Some(h) if !h.is_empty() => h.to_lowercase(),
        _ => return Err(reject(UrlErrorKind::InvalidFormat, "")),
    };

    let class = classify_host(&hostname);
    if options.block_internal_networks {
        if class.is_internal() {
            return Err(reject(UrlErrorKind::InternalNetworkBlocked, &hostname));
        }
        if class == HostClass::PrivateIpv4 {
            return Err(reject(UrlErrorKind::PrivateIpBlocked, &hostname));
        }
    }

    if options.block_ip_addresses && host::looks_like_ip_address(host::strip_brackets(&hostname)) {
        return Err(reject(UrlErrorKind::IpAddressNotAllowed, &hostname));
    }

    if !options.allowed_domains.is_empty() && !options.is_allowed(&hostname) {
        return Err(reject(UrlErrorKind::DomainNotAllowed, &hostname));
    }

    Ok(())
}

fn reject(kind: UrlErrorKind, detail: &str) -> UrlValidationError {
    tracing::debug!(rule = ?kind, detail = %sanitize_for_log(detail), "url rejected");
    UrlValidationError::new(kind)
}
