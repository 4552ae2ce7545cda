//! `vguard url <url>` – check a URL against the configured SSRF policy.

use anyhow::{Context, Result};
use vguard_core::config::{check_allowed_domain, UrlPolicyConfig};
use vguard_core::url_guard::{self, UrlValidationOptions};

/// Command-line overrides for the configured URL policy.
#[derive(Debug, Clone, Default)]
pub struct UrlArgs {
    pub allow_domains: Vec<String>,
    pub allow_http: bool,
    pub allow_internal: bool,
    pub allow_ip_addresses: bool,
}

/// Config supplies the policy; flags can only relax it, except
/// `--allow-domain`, which replaces the allowlist. Domains given on the
/// command line are lowercased and then held to the same rules as config
/// entries.
pub fn resolve_options(cfg: &UrlPolicyConfig, args: &UrlArgs) -> Result<UrlValidationOptions> {
    let mut opts = cfg.to_options();
    if !args.allow_domains.is_empty() {
        let domains = args
            .allow_domains
            .iter()
            .map(|d| -> Result<String> {
                let d = d.to_lowercase();
                check_allowed_domain(&d).context("--allow-domain")?;
                Ok(d)
            })
            .collect::<Result<Vec<_>>>()?;
        opts = opts.with_allowed_domains(domains);
    }
    if args.allow_http {
        opts = opts.with_https_only(false);
    }
    if args.allow_internal {
        opts = opts.with_block_internal_networks(false);
    }
    if args.allow_ip_addresses {
        opts = opts.with_block_ip_addresses(false);
    }
    Ok(opts)
}

pub fn run_url(url: &str, cfg: &UrlPolicyConfig, args: &UrlArgs) -> Result<()> {
    let opts = resolve_options(cfg, args)?;
    tracing::debug!(?opts, "checking url");
    url_guard::validate_url(url, &opts)?;
    println!("ok");
    Ok(())
}
