//! `vguard length <value>` – check length bounds.

use anyhow::Result;
use vguard_core::input;

/// Resolved bounds (flags over config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthArgs {
    pub field: String,
    pub min: usize,
    pub max: usize,
}

pub fn run_length(value: &str, args: &LengthArgs) -> Result<()> {
    input::validate_length(value, &args.field, args.min, args.max)?;
    println!("ok");
    Ok(())
}
