//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::{Duration, Instant};

/// Upper bound for validating one adversarial input.
pub const LINEAR_TIME_BUDGET: Duration = Duration::from_millis(100);

/// Inputs shaped to trigger catastrophic backtracking in naive patterns.
pub fn adversarial_emails() -> Vec<String> {
    vec![
        format!("a{}", "@a".repeat(1000)),
        format!("!@!.{}", "!.".repeat(1000)),
        format!("{}@", "a".repeat(2000)),
        format!("a@{}", "a.".repeat(1000)),
        format!("{}!", "a@a.a".repeat(400)),
        format!("a@a{} ", ".a".repeat(1000)),
    ]
}

/// Runs `f` and returns how long it took.
pub fn timed<F: FnOnce()>(f: F) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}
