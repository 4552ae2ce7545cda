//! `vguard sanitize <value>` – print HTML-escaped text.

use vguard_core::input;

pub fn run_sanitize(value: &str) {
    println!("{}", input::sanitize_input(value));
}
