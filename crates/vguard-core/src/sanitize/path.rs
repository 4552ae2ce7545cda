//! Filename and relative-path cleaning against directory traversal.

use super::{strip_dot_pairs, truncate_chars};

/// Linux NAME_MAX.
pub const MAX_FILENAME_LENGTH: usize = 255;
pub const MAX_PATH_LENGTH: usize = 500;

/// Cleans a user-supplied filename.
///
/// - Drops `/`, `\`, `<`, `>`, `:`, `"`, `|`, `?`, `*` and control characters
/// - Drops `..` sequences (after the separators are gone, so none can re-form)
/// - Limits length to 255 characters
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let drop = matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*')
            || c.is_ascii_control();
        if !drop {
            out.push(c);
        }
    }
    truncate_chars(&strip_dot_pairs(&out), MAX_FILENAME_LENGTH)
}

/// Cleans a user-supplied relative path: drops `..`, collapses runs of `/`,
/// strips a leading `/`, and limits length to 500 characters.
pub fn sanitize_path(path: &str) -> String {
    let without_dots = strip_dot_pairs(path);

    let mut out = String::with_capacity(without_dots.len());
    for c in without_dots.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    let relative = out.strip_prefix('/').unwrap_or(&out);
    truncate_chars(relative, MAX_PATH_LENGTH)
}
