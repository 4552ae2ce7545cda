//! Size-capped JSON parsing for untrusted request bodies.

use serde::de::DeserializeOwned;

/// Default cap for [`sanitize_json`], in bytes.
pub const DEFAULT_JSON_MAX_SIZE: usize = 1_000_000;

/// Parses `input` as `T`, or returns `None` when it is longer than
/// `max_size` bytes or is not valid JSON for `T`. The size check runs before
/// any parsing.
pub fn sanitize_json<T: DeserializeOwned>(input: &str, max_size: usize) -> Option<T> {
    if input.len() > max_size {
        tracing::debug!(len = input.len(), max_size, "json rejected: too large");
        return None;
    }
    match serde_json::from_str(input) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "json rejected: parse error");
            None
        }
    }
}
