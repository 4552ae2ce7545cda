//! Redaction of secrets in structured values before they are logged.

use serde_json::{Map, Value};

/// Replacement for redacted values.
pub const REDACTED: &str = "[REDACTED]";

/// Key fragments that mark a field as sensitive (compared lowercase, as a
/// substring of the lowercased key).
pub const DEFAULT_SENSITIVE_KEYS: &[&str] = &[
    "password",
    "token",
    "secret",
    "apikey",
    "api_key",
    "authorization",
    "cookie",
    "session",
    "creditcard",
    "credit_card",
    "ssn",
    "socialsecurity",
];

/// [`redact_with_keys`] with [`DEFAULT_SENSITIVE_KEYS`].
pub fn redact_sensitive_fields(value: &Value) -> Value {
    redact_with_keys(value, DEFAULT_SENSITIVE_KEYS)
}

/// Returns a copy of `value` in which every object field whose key contains
/// one of `sensitive_keys` (case-insensitive) is replaced by `"[REDACTED]"`.
/// Nested objects and arrays are walked recursively.
pub fn redact_with_keys(value: &Value, sensitive_keys: &[&str]) -> Value {
    let needles: Vec<String> = sensitive_keys.iter().map(|k| k.to_lowercase()).collect();
    redact(value, &needles)
}

fn redact(value: &Value, needles: &[String]) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, v) in map {
                let lower = key.to_lowercase();
                let redacted = if needles.iter().any(|n| lower.contains(n.as_str())) {
                    Value::String(REDACTED.to_string())
                } else {
                    redact(v, needles)
                };
                out.insert(key.clone(), redacted);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(|v| redact(v, needles)).collect()),
        other => other.clone(),
    }
}
