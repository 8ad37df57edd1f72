//! Character classification predicates.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// True if every character is a decimal digit.
///
/// Uses the Unicode `Nd` category, so digits from other scripts count.
/// An empty string has nothing to fail the check and is numeric.
pub fn is_numeric(text: &str, trim_space: bool) -> bool {
    let s = if trim_space { text.trim() } else { text };
    s.chars().all(is_decimal_digit)
}

/// True if any character takes more than one byte in UTF-8
pub fn is_multi_byte(text: &str, trim_space: bool) -> bool {
    let s = if trim_space { text.trim() } else { text };
    !s.is_ascii()
}

/// Unicode decimal digit (general category `Nd`).
///
/// `char::is_numeric` also accepts `Nl`/`No` (roman numerals, fractions,
/// superscripts).
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123456789", false));
        assert!(!is_numeric("12a", false));
        assert!(!is_numeric("1.5", false));
        assert!(!is_numeric("-1", false));
    }

    #[test]
    fn test_is_numeric_empty_is_vacuous() {
        assert!(is_numeric("", true));
        assert!(is_numeric("", false));
        assert!(is_numeric("   ", true));
        assert!(!is_numeric("   ", false));
    }

    #[test]
    fn test_is_numeric_trim_space() {
        assert!(is_numeric(" 42 ", true));
        assert!(!is_numeric(" 42 ", false));
    }

    #[test]
    fn test_is_numeric_other_scripts() {
        // Arabic-Indic, Devanagari and fullwidth digits
        assert!(is_numeric("٠١٢٣", false));
        assert!(is_numeric("१२३", false));
        assert!(is_numeric("１２３", false));
        // Kawi and Nag Mundari digit blocks
        assert!(is_numeric("\u{11F50}\u{11F51}", false));
        assert!(is_numeric("\u{1E4F0}\u{1E4F9}", false));
        // Numeric but not decimal digits
        assert!(!is_numeric("Ⅻ", false));
        assert!(!is_numeric("½", false));
        assert!(!is_numeric("²", false));
    }

    #[test]
    fn test_is_multi_byte() {
        assert!(!is_multi_byte("abc", false));
        assert!(is_multi_byte("café", false));
        assert!(is_multi_byte("日本", false));
        assert!(!is_multi_byte("", false));
        assert!(!is_multi_byte("\u{7f}", false));
        assert!(is_multi_byte("\u{80}", false));
    }

    #[test]
    fn test_is_multi_byte_trim_space() {
        // U+3000 IDEOGRAPHIC SPACE is whitespace and three bytes wide
        assert!(is_multi_byte("\u{3000}abc", false));
        assert!(!is_multi_byte("\u{3000}abc", true));
    }
}
