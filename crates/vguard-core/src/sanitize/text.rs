//! Cleaners for free-form text: log lines, display names, bodies, markdown.

use std::sync::LazyLock;

use regex::Regex;

use super::truncate_chars;
use crate::input::matches_email_pattern;

pub const MAX_LOG_LENGTH: usize = 1000;
/// RFC 5321 path limit.
pub const MAX_SANITIZED_EMAIL_LENGTH: usize = 254;
pub const MAX_USERNAME_LENGTH: usize = 100;
pub const DEFAULT_TEXT_MAX: usize = 10_000;
pub const DEFAULT_MARKDOWN_MAX: usize = 50_000;

/// `on<name>=` event-handler attributes, any case, optional space before `=`.
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)on[a-z0-9_]+\s*=").expect("event handler pattern is a valid constant regex")
});

/// Elements whose whole content is removed from markdown.
const STRIPPED_ELEMENTS: &[&str] = &["script", "iframe"];

/// C0 controls and DEL, except tab, LF and CR.
fn is_disallowed_control(c: char) -> bool {
    c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\r')
}

/// Makes a value safe to interpolate into a single log line: every control
/// character (newlines included) is removed and length is capped at 1000.
pub fn sanitize_for_log(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    truncate_chars(&cleaned, MAX_LOG_LENGTH)
}

/// Trims, lowercases, drops `< > ' "`, and caps at 254 characters.
pub fn sanitize_email(email: &str) -> String {
    let cleaned: String = email
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .collect();
    truncate_chars(&cleaned, MAX_SANITIZED_EMAIL_LENGTH)
}

/// True for at most 254 characters in `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_SANITIZED_EMAIL_LENGTH && matches_email_pattern(email)
}

/// Trims, drops HTML-sensitive and control characters, and caps at 100.
pub fn sanitize_username(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"' | '&') && !c.is_ascii_control())
        .collect();
    truncate_chars(&cleaned, MAX_USERNAME_LENGTH)
}

/// Drops control characters other than tab, LF and CR, and caps at `max_len`.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    let cleaned: String = text.chars().filter(|&c| !is_disallowed_control(c)).collect();
    truncate_chars(&cleaned, max_len)
}

/// Like [`sanitize_text`], and additionally removes complete `<script>` and
/// `<iframe>` elements and neutralizes `on*=` event-handler attributes.
/// Ordinary markdown syntax is left alone.
pub fn sanitize_markdown(markdown: &str, max_len: usize) -> String {
    let cleaned: String = markdown
        .chars()
        .filter(|&c| !is_disallowed_control(c))
        .collect();
    let cleaned = strip_elements(&cleaned);
    let cleaned = EVENT_HANDLER.replace_all(&cleaned, "data-removed=");
    truncate_chars(&cleaned, max_len)
}

/// Removes every `<tag ...>...</tag>` span for the tags in
/// [`STRIPPED_ELEMENTS`], matching names without regard to ASCII case. A span
/// runs from the earliest pending opening tag to the first closing tag after
/// it. An opening tag with no closing tag is left as is.
///
/// Characters are appended to the output one at a time and tags are detected
/// on the output, so a tag that only forms once an inner element has been
/// cut out (`<scr<script></script>ipt>`) is caught as well.
fn strip_elements(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Byte offsets in `out` of pending opening tags, ascending, per tag.
    let mut opens: Vec<Vec<usize>> = vec![Vec::new(); STRIPPED_ELEMENTS.len()];

    for c in input.chars() {
        out.push(c);
        let before = out.len() - c.len_utf8();

        if !(c.is_alphanumeric() || c == '_') {
            for (tag, pending) in STRIPPED_ELEMENTS.iter().zip(opens.iter_mut()) {
                if ends_with_tag(&out[..before], "<", tag, "") {
                    pending.push(before - tag.len() - 1);
                }
            }
        }

        if c != '>' {
            continue;
        }
        let closed = STRIPPED_ELEMENTS
            .iter()
            .zip(opens.iter())
            .position(|(tag, pending)| !pending.is_empty() && ends_with_tag(&out, "</", tag, ">"));
        if let Some(idx) = closed {
            let cut = opens[idx][0];
            out.truncate(cut);
            for pending in opens.iter_mut() {
                while pending.last().is_some_and(|&p| p >= cut) {
                    pending.pop();
                }
            }
        }
    }
    out
}

/// `s` ends with `{prefix}{tag}{suffix}`, tag compared ignoring ASCII case.
fn ends_with_tag(s: &str, prefix: &str, tag: &str, suffix: &str) -> bool {
    let s = s.as_bytes();
    let total = prefix.len() + tag.len() + suffix.len();
    if s.len() < total {
        return false;
    }
    let tail = &s[s.len() - total..];
    tail.starts_with(prefix.as_bytes())
        && tail.ends_with(suffix.as_bytes())
        && tail[prefix.len()..prefix.len() + tag.len()].eq_ignore_ascii_case(tag.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_cannot_be_forged() {
        assert_eq!(
            sanitize_for_log("user=bob\nlevel=ERROR forged"),
            "user=boblevel=ERROR forged"
        );
        assert_eq!(sanitize_for_log("a\r\tb\x1b[31mc\x7f"), "ab[31mc");
        assert_eq!(sanitize_for_log(&"x".repeat(1500)).len(), MAX_LOG_LENGTH);
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(sanitize_email("  <User@Example.COM> "), "user@example.com");
        assert_eq!(sanitize_email("o'neil\"@x.io"), "oneil@x.io");
    }

    #[test]
    fn email_shape_and_cap() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a b@example.com"));
        let at_cap = format!("{}@example.com", "a".repeat(242));
        assert_eq!(at_cap.chars().count(), MAX_SANITIZED_EMAIL_LENGTH);
        assert!(is_valid_email(&at_cap));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(243))));
    }

    #[test]
    fn username_drops_markup() {
        assert_eq!(sanitize_username("  <b>Tom & Jerry</b> "), "bTom  Jerry/b");
        assert_eq!(sanitize_username("name\x00\x07"), "name");
        assert_eq!(sanitize_username(&"n".repeat(150)).len(), MAX_USERNAME_LENGTH);
    }

    #[test]
    fn text_keeps_whitespace_controls() {
        assert_eq!(sanitize_text("line1\nline2\r\n\tx\x00\x0b", 100), "line1\nline2\r\n\tx");
        assert_eq!(sanitize_text("abcdef", 3), "abc");
    }

    #[test]
    fn markdown_strips_script_and_iframe() {
        let md = "# Title\n<script>alert(1)</script>ok <IFRAME src=x></iframe>done";
        assert_eq!(sanitize_markdown(md, DEFAULT_MARKDOWN_MAX), "# Title\nok done");
    }

    #[test]
    fn markdown_strips_each_element_separately() {
        let md = "a<script>1</script>b<script type=x>2</SCRIPT>c";
        assert_eq!(sanitize_markdown(md, DEFAULT_MARKDOWN_MAX), "abc");
    }

    #[test]
    fn markdown_keeps_unclosed_and_lookalike_tags() {
        assert_eq!(
            sanitize_markdown("<scripting> text", DEFAULT_MARKDOWN_MAX),
            "<scripting> text"
        );
        assert_eq!(
            sanitize_markdown("<script>never closed", DEFAULT_MARKDOWN_MAX),
            "<script>never closed"
        );
    }

    #[test]
    fn markdown_elements_reformed_by_removal_are_stripped() {
        assert_eq!(
            sanitize_markdown("<scr<script></script>ipt>alert(1)</script>", DEFAULT_MARKDOWN_MAX),
            ""
        );
        assert_eq!(
            sanitize_markdown("a<scr<iframe></iframe>ipt>x</script>b", DEFAULT_MARKDOWN_MAX),
            "ab"
        );
        assert_eq!(
            sanitize_markdown("<script>x</scr<script></script>ipt>y", DEFAULT_MARKDOWN_MAX),
            "ipt>y"
        );
        let nested = format!(
            "{}<script></script>{}alert(1)",
            "<scr".repeat(50),
            "ipt></script>".repeat(50)
        );
        assert_eq!(sanitize_markdown(&nested, DEFAULT_MARKDOWN_MAX), "alert(1)");
    }

    #[test]
    fn markdown_span_starts_at_earliest_open_tag() {
        assert_eq!(
            sanitize_markdown("a<script>1<script>2</script>b", DEFAULT_MARKDOWN_MAX),
            "ab"
        );
    }

    #[test]
    fn markdown_neutralizes_event_handlers() {
        assert_eq!(
            sanitize_markdown("<img src=x onerror=alert(1)>", DEFAULT_MARKDOWN_MAX),
            "<img src=x data-removed=alert(1)>"
        );
        assert_eq!(
            sanitize_markdown("<a OnClick = \"x\">", DEFAULT_MARKDOWN_MAX),
            "<a data-removed= \"x\">"
        );
    }

    #[test]
    fn markdown_is_capped() {
        assert_eq!(sanitize_markdown("**bold**", 4), "**bo");
    }
}
