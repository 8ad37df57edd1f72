//! Repeated removal of literal phrases from either end of a string.
//!
//! Each phrase is stripped as many times as it keeps matching at the
//! boundary before the next phrase is tried. Matching is exact and
//! case-sensitive. Empty phrases never match.

use tracing::trace;

/// Which end of the text a phrase is stripped from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

fn trim_side(text: &str, trim_space: bool, phrases: &[&str], side: Side) -> String {
    let mut s = if trim_space { text.trim() } else { text };

    for phrase in phrases {
        if phrase.is_empty() {
            trace!(?side, "skipping empty phrase");
            continue;
        }

        loop {
            let stripped = match side {
                Side::Start => s.strip_prefix(phrase),
                Side::End => s.strip_suffix(phrase),
            };
            let Some(rest) = stripped else {
                break;
            };
            s = if trim_space { rest.trim() } else { rest };
        }
    }

    s.to_string()
}

/// Strip each phrase, in order, from the start of `text` until it stops matching.
pub fn trim_prefix_phrases(text: &str, trim_space: bool, phrases: &[&str]) -> String {
    trim_side(text, trim_space, phrases, Side::Start)
}

/// Strip each phrase, in order, from the end of `text` until it stops matching.
pub fn trim_suffix_phrases(text: &str, trim_space: bool, phrases: &[&str]) -> String {
    trim_side(text, trim_space, phrases, Side::End)
}

/// Prefix trimming followed by suffix trimming with the same phrases.
///
/// The two passes do not interleave. The prefix pass runs over every phrase
/// before the suffix pass starts, so the result can depend on that order.
pub fn trim_phrases(text: &str, trim_space: bool, phrases: &[&str]) -> String {
    let prefixed = trim_prefix_phrases(text, trim_space, phrases);
    trim_suffix_phrases(&prefixed, trim_space, phrases)
}
