//! HTML escaping for text that is rendered outside a framework's own escaping.

/// Escapes `&`, `<`, `>`, `"`, `'` and `/` for embedding in HTML.
///
/// The input is walked once, left to right, and replacements are never
/// rescanned; this is equivalent to replacing `&` before every other
/// character, so no entity is ever produced and then re-mangled.
///
/// Not idempotent: running it twice escapes the `&` of every entity produced
/// by the first pass. Apply it exactly once, at the point of rendering.
///
/// This is defense in depth. It does not replace parameterized queries or a
/// Content-Security-Policy.
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
