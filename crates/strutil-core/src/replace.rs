//! Bulk literal replacement.

use tracing::trace;

/// Replace up to `n` occurrences of each phrase with `replacement`.
///
/// Phrases are applied in order, so later phrases see the output of the
/// earlier ones. A negative `n` replaces every occurrence; `n == 0`
/// replaces nothing. Empty phrases are skipped.
pub fn replace_all_phrases(text: &str, replacement: &str, n: isize, phrases: &[&str]) -> String {
    let mut s = text.to_string();

    for phrase in phrases {
        if phrase.is_empty() {
            trace!("skipping empty phrase");
            continue;
        }

        s = if n < 0 {
            s.replace(phrase, replacement)
        } else {
            s.replacen(phrase, replacement, n as usize)
        };
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_all_phrases_unlimited() {
        assert_eq!(
            replace_all_phrases("a-b_c-d", " ", -1, &["-", "_"]),
            "a b c d"
        );
    }

    #[test]
    fn test_replace_all_phrases_limited() {
        assert_eq!(replace_all_phrases("aaaa", "b", 2, &["a"]), "bbaa");
        assert_eq!(replace_all_phrases("x.y.z", "", 1, &["."]), "xy.z");
        assert_eq!(replace_all_phrases("abc", "z", 0, &["a", "b"]), "abc");
    }

    #[test]
    fn test_replace_all_phrases_in_order() {
        // The second phrase sees the first replacement
        assert_eq!(replace_all_phrases("cat", "dog", -1, &["cat", "dog"]), "dog");
        assert_eq!(replace_all_phrases("ab", "b", -1, &["a", "bb"]), "b");
    }

    #[test]
    fn test_replace_all_phrases_skips_empty() {
        assert_eq!(replace_all_phrases("abc", "-", -1, &["", "b"]), "a-c");
        assert_eq!(replace_all_phrases("abc", "-", -1, &[]), "abc");
    }
}
