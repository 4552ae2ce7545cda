//! Hostname classification for the SSRF pipeline.

use std::net::Ipv4Addr;

/// Host literals that always point back at the fetching machine.
const INTERNAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "0.0.0.0", "[::]"];

/// Where a lowercased hostname falls, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostClass {
    /// `localhost`, `127.0.0.1` or `0.0.0.0`.
    LiteralInternal,
    /// IPv4 literal in `10/8`, `172.16/12` or `192.168/16`.
    PrivateIpv4,
    /// `::1` or `[::]`.
    Ipv6LoopbackOrUnspecified,
    /// Any other IPv4 or IPv6 literal.
    BareIpAddress,
    DomainName,
}

impl HostClass {
    pub fn is_internal(self) -> bool {
        matches!(
            self,
            HostClass::LiteralInternal | HostClass::Ipv6LoopbackOrUnspecified
        )
    }
}

/// Classifies a lowercased hostname. IPv6 hosts may be given with or without
/// brackets; both spellings are compared against the internal literals.
pub fn classify_host(host: &str) -> HostClass {
    let bare = strip_brackets(host);

    if INTERNAL_HOSTS.contains(&host) || INTERNAL_HOSTS.contains(&bare) {
        return if bare.contains(':') {
            HostClass::Ipv6LoopbackOrUnspecified
        } else {
            HostClass::LiteralInternal
        };
    }

    if is_private_ipv4(bare) {
        return HostClass::PrivateIpv4;
    }

    if looks_like_ip_address(bare) {
        return HostClass::BareIpAddress;
    }

    HostClass::DomainName
}

pub(crate) fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}

/// RFC 1918 ranges only. Link-local (`169.254/16`), CGNAT (`100.64/10`) and
/// IPv6 ULA/link-local are not covered here; with the default options they
/// are still rejected as bare IP addresses.
fn is_private_ipv4(host: &str) -> bool {
    let Ok(addr) = host.parse::<Ipv4Addr>() else {
        return false;
    };
    match addr.octets() {
        [10, ..] => true,
        [172, second, ..] => (16..=31).contains(&second),
        [192, 168, ..] => true,
        _ => false,
    }
}

/// Syntactic IP check: four dot-separated groups of 1-3 digits, or a string
/// containing `:` made only of hex digits and colons.
pub(crate) fn looks_like_ip_address(host: &str) -> bool {
    is_dotted_quad(host) || is_ipv6_like(host)
}

fn is_dotted_quad(host: &str) -> bool {
    let mut groups = 0;
    for group in host.split('.') {
        groups += 1;
        if groups > 4 || group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

fn is_ipv6_like(host: &str) -> bool {
    host.contains(':') && host.bytes().all(|b| b == b':' || b.is_ascii_hexdigit())
}
