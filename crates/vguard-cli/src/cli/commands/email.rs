//! `vguard email <value>` – check email syntax.

use anyhow::Result;
use vguard_core::input;

pub fn run_email(value: &str) -> Result<()> {
    input::validate_email(value)?;
    println!("ok");
    Ok(())
}
