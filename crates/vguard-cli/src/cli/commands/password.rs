//! `vguard password <value>` – check password strength rules.

use anyhow::Result;
use vguard_core::input;

pub fn run_password(value: &str) -> Result<()> {
    input::validate_password(value)?;
    println!("ok");
    Ok(())
}
