//! Splitting joined capitalized tokens into words.

/// Put a space before every uppercase letter of a joined token.
///
/// The first character and letters already preceded by a space are left
/// alone, so `"AboutMe"` becomes `"About Me"` and `"About Me"` is unchanged.
pub fn case_to_words(text: &str, trim_space: bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p != ' ') {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }

    if trim_space {
        out.trim().to_string()
    } else {
        out
    }
}
