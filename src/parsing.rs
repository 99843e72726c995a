//! Shared helpers for decoding Meta chat exports.

use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};

/// Fix Meta's broken encoding (Mojibake).
///
/// Meta exports UTF-8 text encoded as if it were ISO-8859-1: each UTF-8 byte
/// is stored as a separate code point. Example: "Привет" becomes
/// "ÐŸÑ€Ð¸Ð²ÐµÑ‚".
///
/// The repair only applies when every char fits in a byte and the bytes form
/// valid UTF-8. Anything else is returned unchanged, so text that was never
/// mangled (like a real `❤`) survives a second pass.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::fix_mojibake_encoding;
///
/// assert_eq!(fix_mojibake_encoding("Hello"), "Hello");
/// assert_eq!(fix_mojibake_encoding("\u{e2}\u{9d}\u{a4}"), "❤");
/// assert_eq!(fix_mojibake_encoding("❤"), "❤");
/// ```
pub fn fix_mojibake_encoding(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let bytes: Option<Vec<u8>> = s
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect();

    match bytes.map(String::from_utf8) {
        Some(Ok(fixed)) => Cow::Owned(fixed),
        _ => Cow::Borrowed(s),
    }
}

/// Repairs `s` in place, allocating only when something changed.
pub(crate) fn repair_in_place(s: &mut String) {
    if let Cow::Owned(fixed) = fix_mojibake_encoding(s) {
        *s = fixed;
    }
}

/// Parses a millisecond timestamp to DateTime.
pub fn parse_ms_timestamp(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(timestamp_ms).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_encoding_ascii() {
        assert_eq!(fix_mojibake_encoding("Hello"), "Hello");
        assert_eq!(fix_mojibake_encoding("Test 123"), "Test 123");
        assert!(matches!(fix_mojibake_encoding("Hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_fix_encoding_cyrillic() {
        let mangled: String = "Привет".bytes().map(char::from).collect();
        assert_eq!(fix_mojibake_encoding(&mangled), "Привет");
    }

    #[test]
    fn test_fix_encoding_leaves_real_unicode() {
        assert_eq!(fix_mojibake_encoding("😂"), "😂");
        assert_eq!(fix_mojibake_encoding("Привет"), "Привет");
    }

    #[test]
    fn test_fix_encoding_invalid_utf8_bytes_kept() {
        // A lone Latin-1 é is not a valid UTF-8 sequence
        assert_eq!(fix_mojibake_encoding("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_repair_in_place() {
        let mut s: String = "❤".bytes().map(char::from).collect();
        repair_in_place(&mut s);
        assert_eq!(s, "❤");
    }

    #[test]
    fn test_parse_ms_timestamp() {
        let ts = parse_ms_timestamp(1705315800000).expect("valid timestamp");
        assert_eq!(ts.timestamp(), 1705315800);
        assert!(parse_ms_timestamp(i64::MAX).is_none());
    }
}
