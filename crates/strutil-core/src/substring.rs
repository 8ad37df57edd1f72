//! Codepoint-indexed substring extraction.

use tracing::trace;

/// Marker appended to a cut that leaves characters behind
pub const ELLIPSIS: &str = "...";

/// Cut `text` between the codepoint positions `start` and `end`.
///
/// Positions count `char`s, not bytes. A negative `end` returns `text`
/// untouched. When `end` lies inside the text the cut is made there and,
/// with `ellipsis`, the marker is appended. When `end` runs past the last
/// character everything from `start` onwards is returned bare. A `start`
/// that is never reached before the cut falls back to the beginning.
pub fn substring(text: &str, start: isize, end: isize, trim_space: bool, ellipsis: bool) -> String {
    if end < 0 {
        trace!(end, "negative end, returning text unchanged");
        return text.to_string();
    }

    let s = if trim_space { text.trim() } else { text };

    let mut from = 0;
    for (pos, (offset, _)) in s.char_indices().enumerate() {
        let pos = pos as isize;
        if pos == start {
            from = offset;
        }

        if pos == end {
            let cut = &s[from..offset];
            // The walk only gets here while a char remains at `offset`.
            return if ellipsis {
                format!("{}{}", cut, ELLIPSIS)
            } else {
                cut.to_string()
            };
        }
    }

    s[from..].to_string()
}
