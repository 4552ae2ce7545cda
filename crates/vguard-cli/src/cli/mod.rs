//! CLI for the vguard validators.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use vguard_core::config;

use commands::{
    run_completions, run_email, run_length, run_man, run_password, run_reset_token,
    run_sanitize, run_social_url, run_url, LengthArgs, UrlArgs,
};

/// Top-level CLI for vguard.
#[derive(Debug, Parser)]
#[command(name = "vguard")]
#[command(about = "vguard: validate untrusted input and guard outbound URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check the syntax of an email address.
    Email {
        /// Address to check.
        value: String,
    },

    /// Check a new password against the strength rules.
    Password {
        /// Password to check.
        value: String,
    },

    /// Check the shape of a password-reset token.
    ResetToken {
        /// Token to check.
        value: String,
    },

    /// Check that a value's length is within bounds.
    Length {
        /// Value to check.
        value: String,
        /// Field name used in the error message.
        #[arg(long, default_value = "input")]
        field: String,
        /// Minimum length in characters (default from config).
        #[arg(long)]
        min: Option<usize>,
        /// Maximum length in characters (default from config).
        #[arg(long)]
        max: Option<usize>,
    },

    /// Print the value HTML-escaped for display.
    Sanitize {
        /// Text to escape.
        value: String,
    },

    /// Check a URL against the SSRF policy (defaults from config).
    Url {
        /// URL to check.
        url: String,
        /// Allowed domain (repeatable); replaces the configured allowlist.
        #[arg(long = "allow-domain", value_name = "DOMAIN")]
        allow_domains: Vec<String>,
        /// Accept schemes other than https.
        #[arg(long)]
        allow_http: bool,
        /// Do not block localhost, loopback and private ranges.
        #[arg(long)]
        allow_internal: bool,
        /// Accept IP-literal hosts.
        #[arg(long)]
        allow_ip_addresses: bool,
    },

    /// Check a URL for a social-media preview fetch.
    SocialUrl {
        /// URL to check.
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Email { value } => run_email(&value)?,
            CliCommand::Password { value } => run_password(&value)?,
            CliCommand::ResetToken { value } => run_reset_token(&value)?,
            CliCommand::Length {
                value,
                field,
                min,
                max,
            } => {
                let args = LengthArgs {
                    field,
                    min: min.unwrap_or(cfg.length.min),
                    max: max.unwrap_or(cfg.length.max),
                };
                run_length(&value, &args)?;
            }
            CliCommand::Sanitize { value } => run_sanitize(&value),
            CliCommand::Url {
                url,
                allow_domains,
                allow_http,
                allow_internal,
                allow_ip_addresses,
            } => {
                let args = UrlArgs {
                    allow_domains,
                    allow_http,
                    allow_internal,
                    allow_ip_addresses,
                };
                run_url(&url, &cfg.url, &args)?;
            }
            CliCommand::SocialUrl { url } => run_social_url(&url)?,
            CliCommand::Completions { shell } => run_completions(shell, Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
