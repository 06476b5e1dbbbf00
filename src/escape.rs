//! PARAM-VALUE escaping.
//!
//! Inside a quoted structured-data value only `"`, `\` and `]` are escaped,
//! each with a single backslash. A backslash followed by anything else is
//! an ordinary character.

use std::borrow::Cow;

#[inline]
fn is_escapable(ch: u8) -> bool {
    matches!(ch, b'"' | b'\\' | b']')
}

/// Decode a raw PARAM-VALUE as it appeared between the quotes.
///
/// Borrows the input when it contains no backslash.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    let buf = raw.as_bytes();
    let Some(first) = buf.iter().position(|ch| *ch == b'\\') else {
        return Cow::Borrowed(raw);
    };

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..first]);

    // slicing only ever happens next to ASCII bytes, so every cut is on a
    // char boundary
    let mut start = first;
    let mut pos = first;
    while pos < buf.len() {
        if buf[pos] == b'\\' && pos + 1 < buf.len() && is_escapable(buf[pos + 1]) {
            out.push_str(&raw[start..pos]);
            pos += 1;
            start = pos;
        }
        pos += 1;
    }
    out.push_str(&raw[start..]);

    Cow::Owned(out)
}

/// Escape `value` so it can be written between the quotes of a PARAM-VALUE.
///
/// `unescape(&escape(s)) == s` for every `s`.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.bytes().any(is_escapable) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if ch.is_ascii() && is_escapable(ch as u8) {
            out.push('\\');
        }
        out.push(ch);
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_escapes() {
        assert_eq!(unescape(r#"\"\\\]"#), "\"\\]");
        assert_eq!(unescape(r#"val\"ue"#), "val\"ue");
        assert_eq!(unescape(r#"a\\b"#), r#"a\b"#);
    }

    #[test]
    fn other_backslashes_pass_through() {
        assert_eq!(unescape(r#"C:\temp\n"#), r#"C:\temp\n"#);
        assert_eq!(unescape(r#"trailing\"#), r#"trailing\"#);
        // `\\` is consumed as a pair before the `n` is looked at
        assert_eq!(unescape(r#"\\n"#), r#"\n"#);
        assert_eq!(unescape(r#"\\\n"#), r#"\\n"#);
    }

    #[test]
    fn whitespace_and_unicode_unchanged() {
        assert_eq!(unescape("  tab\there  "), "  tab\there  ");
        assert_eq!(unescape(r#"héllo \] wörld"#), "héllo ] wörld");
    }

    #[test]
    fn borrows_when_possible() {
        assert!(matches!(unescape("plain value"), Cow::Borrowed(_)));
        assert!(matches!(unescape(r#"a\]"#), Cow::Owned(_)));
        assert!(matches!(escape("plain value"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_inverts_unescape() {
        assert_eq!(escape("\"\\]"), r#"\"\\\]"#);
        for value in ["", "plain", r#"a\b"#, "\"quoted\"", "[x]", r#"\\\"#, "é]"] {
            assert_eq!(unescape(&escape(value)), value, "value: {value}");
        }
    }
}
