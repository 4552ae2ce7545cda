//! Best-effort cleaners for user text headed to logs, filenames, markup and
//! storage.
//!
//! Unlike [`crate::input`], nothing here rejects input: each function returns
//! a cleaned value, a yes/no answer, or `None`. They are linear-time and
//! bounded by a per-function length cap.

mod html;
mod json;
mod path;
mod redact;
mod scheme;
mod text;

pub use html::escape_html;
pub use json::{sanitize_json, DEFAULT_JSON_MAX_SIZE};
pub use path::{sanitize_filename, sanitize_path, MAX_FILENAME_LENGTH, MAX_PATH_LENGTH};
pub use redact::{redact_sensitive_fields, redact_with_keys, DEFAULT_SENSITIVE_KEYS, REDACTED};
pub use scheme::{is_valid_url, is_valid_uuid, sanitize_url, DEFAULT_URL_SCHEMES};
pub use text::{
    is_valid_email, sanitize_email, sanitize_for_log, sanitize_markdown, sanitize_text,
    sanitize_username, DEFAULT_MARKDOWN_MAX, DEFAULT_TEXT_MAX, MAX_LOG_LENGTH,
    MAX_SANITIZED_EMAIL_LENGTH, MAX_USERNAME_LENGTH,
};

/// Keeps at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Drops every `..` pair, including pairs that only form once an earlier
/// pair has been dropped (so `....` and `...` leave no `..` behind).
fn strip_dot_pairs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '.' && out.ends_with('.') {
            out.pop();
        } else {
            out.push(c);
        }
    }
    out
}
