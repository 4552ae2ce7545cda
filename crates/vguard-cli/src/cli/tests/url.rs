//! Tests for url and social-url.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_url_defaults() {
    match parse(&["vguard", "url", "https://example.com/a"]) {
        CliCommand::Url {
            url,
            allow_domains,
            allow_http,
            allow_internal,
            allow_ip_addresses,
        } => {
            assert_eq!(url, "https://example.com/a");
            assert!(allow_domains.is_empty());
            assert!(!allow_http);
            assert!(!allow_internal);
            assert!(!allow_ip_addresses);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_overrides() {
    match parse(&[
        "vguard",
        "url",
        "http://10.0.0.1/",
        "--allow-domain",
        "example.com",
        "--allow-domain",
        "example.org",
        "--allow-http",
        "--allow-internal",
        "--allow-ip-addresses",
    ]) {
        CliCommand::Url {
            allow_domains,
            allow_http,
            allow_internal,
            allow_ip_addresses,
            ..
        } => {
            assert_eq!(allow_domains, vec!["example.com", "example.org"]);
            assert!(allow_http);
            assert!(allow_internal);
            assert!(allow_ip_addresses);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_social_url() {
    match parse(&["vguard", "social-url", "https://instagram.com/p/1"]) {
        CliCommand::SocialUrl { url } => assert_eq!(url, "https://instagram.com/p/1"),
        _ => panic!("expected SocialUrl"),
    }
}
