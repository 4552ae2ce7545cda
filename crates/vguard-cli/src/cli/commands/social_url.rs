//! `vguard social-url <url>` – check a social-media preview URL.

use anyhow::Result;
use vguard_core::url_guard;

pub fn run_social_url(url: &str) -> Result<()> {
    url_guard::validate_social_media_url(url)?;
    println!("ok");
    Ok(())
}
