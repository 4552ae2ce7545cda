//! `vguard reset-token <value>` – check reset token shape.

use anyhow::Result;
use vguard_core::input;

pub fn run_reset_token(value: &str) -> Result<()> {
    input::validate_reset_token(value)?;
    println!("ok");
    Ok(())
}
