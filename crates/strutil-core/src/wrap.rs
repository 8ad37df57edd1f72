//! Fixed-width line wrapping for ASCII text.
//!
//! Widths count bytes. Multi-byte characters cut at a chunk boundary are
//! replaced with U+FFFD rather than panicking; use this on ASCII only.

use tracing::trace;

/// Split `text` into lines of at most `max` bytes.
///
/// `max == 0` yields no lines. Text that already fits (`max >= len - 1`)
/// comes back as one line. Otherwise the text is cut every `max` bytes
/// and the remainder forms the last line.
pub fn wrapped_ascii(text: &str, max: usize) -> Vec<String> {
    if max == 0 {
        trace!("zero wrap width, no lines");
        return Vec::new();
    }

    let bytes = text.as_bytes();
    if max >= bytes.len().saturating_sub(1) {
        return vec![text.to_string()];
    }

    bytes
        .chunks(max)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_ascii_zero_width() {
        assert!(wrapped_ascii("", 0).is_empty());
        assert!(wrapped_ascii("abc", 0).is_empty());
    }

    #[test]
    fn test_wrapped_ascii_fits() {
        assert_eq!(wrapped_ascii("abc", 10), vec!["abc"]);
        assert_eq!(wrapped_ascii("", 3), vec![""]);
        // Within one byte of the width still counts as fitting
        assert_eq!(wrapped_ascii("abcd", 3), vec!["abcd"]);
    }

    #[test]
    fn test_wrapped_ascii_splits() {
        assert_eq!(wrapped_ascii("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrapped_ascii("abcdef", 2), vec!["ab", "cd", "ef"]);
        assert_eq!(wrapped_ascii("abcdefg", 1).len(), 7);
    }

    #[test]
    fn test_wrapped_ascii_multibyte_does_not_panic() {
        let lines = wrapped_ascii("ééé", 1);
        assert_eq!(lines.len(), 6);
    }
}
