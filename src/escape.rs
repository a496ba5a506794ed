//! Text transforms applied to content on its way out.
//!
//! Fast-path optimized: both transforms scan with memchr first and copy
//! the input untouched when there is nothing to change.

use memchr::{memchr, memchr3};

/// Replace every `\n` in `text` with `<br/>`, appending to `out`.
///
/// Lines arrive already split, so this rarely fires, but paragraph text
/// always passes through it.
///
/// # Example
/// ```
/// use blockmark::escape::newlines_to_breaks_into;
///
/// let mut out = String::new();
/// newlines_to_breaks_into(&mut out, "a\nb");
/// assert_eq!(out, "a<br/>b");
/// ```
pub fn newlines_to_breaks_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = memchr(b'\n', &bytes[start..]) {
        out.push_str(&text[start..start + pos]);
        out.push_str("<br/>");
        start += pos + 1;
    }
    out.push_str(&text[start..]);
}

/// Whether `text` contains anything that HTML escaping would change.
#[inline]
pub fn needs_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'<', b'>', b'&', bytes).is_some() || memchr(b'"', bytes).is_some()
}

/// HTML-escape `<`, `>`, `&` and `"` in `text`, appending to `out`.
///
/// # Example
/// ```
/// use blockmark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<b>");
/// assert_eq!(out, "&lt;b&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, text: &str) {
    if needs_escape(text) {
        html_escape::encode_double_quoted_attribute_to_string(text, out);
    } else {
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(text: &str) -> String {
        let mut out = String::new();
        newlines_to_breaks_into(&mut out, text);
        out
    }

    fn escaped(text: &str) -> String {
        let mut out = String::new();
        escape_text_into(&mut out, text);
        out
    }

    #[test]
    fn test_breaks_noop() {
        assert_eq!(breaks("plain line"), "plain line");
        assert_eq!(breaks(""), "");
    }

    #[test]
    fn test_breaks_all_newlines() {
        assert_eq!(breaks("\na\n\nb\n"), "<br/>a<br/><br/>b<br/>");
    }

    #[test]
    fn test_escape_noop() {
        assert!(!needs_escape("nothing here"));
        assert_eq!(escaped("nothing here"), "nothing here");
    }

    #[test]
    fn test_escape_specials() {
        assert_eq!(escaped("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
    }

    #[test]
    fn test_escape_appends() {
        let mut out = String::from("<li>");
        escape_text_into(&mut out, "x&y");
        assert_eq!(out, "<li>x&amp;y");
    }
}
