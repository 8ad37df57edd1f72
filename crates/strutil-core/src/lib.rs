//! Stateless text helpers.
//!
//! Every function here is pure: it reads its arguments, allocates its
//! result and never fails. Out-of-range indices, empty phrase lists and
//! zero widths degrade to documented defaults instead of errors.
//!
//! Positions passed to [`substring`] count Unicode scalar values, not
//! bytes. [`wrapped_ascii`] is the one exception and works on bytes.

pub mod classify;
pub mod coerce;
pub mod compare;
pub mod replace;
pub mod substring;
pub mod trim;
pub mod words;
pub mod wrap;

// Re-export commonly used functions at crate level
pub use classify::{is_multi_byte, is_numeric};
pub use coerce::{split_trim, to_csv, to_slice, to_string, ToSlice, DEFAULT_GLUE};
pub use compare::{
    contains_all, contains_all_ignore_case, contains_any, contains_any_ignore_case, is_iequal,
};
pub use replace::replace_all_phrases;
pub use substring::{substring, ELLIPSIS};
pub use trim::{trim_phrases, trim_prefix_phrases, trim_suffix_phrases};
pub use words::case_to_words;
pub use wrap::wrapped_ascii;
