use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::url_guard::UrlValidationOptions;

/// Default URL policy (`[url]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlPolicyConfig {
    /// Lowercase domains without a leading dot; empty disables the allowlist.
    pub allowed_domains: Vec<String>,
    pub https_only: bool,
    pub block_internal_networks: bool,
    pub block_ip_addresses: bool,
}

impl Default for UrlPolicyConfig {
    fn default() -> Self {
        let opts = UrlValidationOptions::default();
        Self {
            allowed_domains: opts.allowed_domains,
            https_only: opts.https_only,
            block_internal_networks: opts.block_internal_networks,
            block_ip_addresses: opts.block_ip_addresses,
        }
    }
}

impl UrlPolicyConfig {
    pub fn to_options(&self) -> UrlValidationOptions {
        UrlValidationOptions::default()
            .with_allowed_domains(self.allowed_domains.iter().cloned())
            .with_https_only(self.https_only)
            .with_block_internal_networks(self.block_internal_networks)
            .with_block_ip_addresses(self.block_ip_addresses)
    }
}

/// Default bounds for generic length checks (`[length]` section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthConfig {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Global configuration loaded from `~/.config/vguard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub url: UrlPolicyConfig,
    #[serde(default)]
    pub length: LengthConfig,
}

impl GuardConfig {
    fn validate(&self) -> Result<()> {
        if self.length.min > self.length.max {
            anyhow::bail!(
                "length.min ({}) is greater than length.max ({})",
                self.length.min,
                self.length.max
            );
        }
        for domain in &self.url.allowed_domains {
            check_allowed_domain(domain).context("url.allowed_domains")?;
        }
        Ok(())
    }
}

/// Allowlist entries must be non-empty, lowercase and without a leading dot.
/// An empty entry would match any host ending in `.`, and a leading dot or
/// uppercase letter would never match a parsed host.
pub fn check_allowed_domain(domain: &str) -> Result<()> {
    if domain.is_empty() || domain.starts_with('.') || domain.chars().any(|c| c.is_uppercase()) {
        anyhow::bail!(
            "allowed domain {domain:?} must be non-empty, lowercase, with no leading dot"
        );
    }
    Ok(())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GuardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GuardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and check configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<GuardConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GuardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
