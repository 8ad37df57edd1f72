//! Equality and containment checks.
//!
//! The case-insensitive "any" and equality checks fold to lower case while
//! the case-insensitive "all" check folds to upper case. Both foldings are
//! kept as they are since callers may rely on either.

/// True if every value equals its neighbour once lower-cased.
///
/// With `trim_space` each value is whitespace-trimmed first. No values is
/// `false`; a single value is trivially equal to itself.
pub fn is_iequal(trim_space: bool, values: &[&str]) -> bool {
    if values.is_empty() {
        return false;
    }

    let normalize = |v: &str| {
        if trim_space {
            v.trim().to_lowercase()
        } else {
            v.to_lowercase()
        }
    };

    let folded: Vec<String> = values.iter().map(|v| normalize(*v)).collect();
    folded.windows(2).all(|pair| pair[0] == pair[1])
}

/// True if any candidate occurs in `text`, ignoring case
pub fn contains_any_ignore_case(text: &str, candidates: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    candidates
        .iter()
        .any(|c| haystack.contains(&c.to_lowercase()))
}

/// True if every candidate occurs in `text`, ignoring case
pub fn contains_all_ignore_case(text: &str, candidates: &[&str]) -> bool {
    let haystack = text.to_uppercase();
    candidates
        .iter()
        .all(|c| haystack.contains(&c.to_uppercase()))
}

/// True if any candidate occurs in `text`
pub fn contains_any(text: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| text.contains(c))
}

/// True if every candidate occurs in `text`
pub fn contains_all(text: &str, candidates: &[&str]) -> bool {
    candidates.iter().all(|c| text.contains(c))
}
