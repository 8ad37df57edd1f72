//! Rendering values as strings and string lists.

use std::fmt::Display;

use serde_json::Value;

/// Separator used by [`to_csv`] when the caller passes an empty glue
pub const DEFAULT_GLUE: &str = ",";

/// Default textual rendering of a value
pub fn to_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Join the rendering of each value with `glue` (`","` when empty)
pub fn to_csv<T: Display>(values: &[T], glue: &str) -> String {
    let glue = if glue.is_empty() { DEFAULT_GLUE } else { glue };
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(glue)
}

/// Split on `delimiter` and trim whitespace around every part
pub fn split_trim(text: &str, delimiter: &str) -> Vec<String> {
    text.split(delimiter).map(|p| p.trim().to_string()).collect()
}

/// Normalize a value into a list of strings
pub fn to_slice<T: ToSlice>(value: T) -> Vec<String> {
    value.to_slice()
}

/// Values that can be normalized into a list of strings.
///
/// String lists pass through unchanged. Anything else becomes a
/// one-element list holding its rendering.
pub trait ToSlice {
    fn to_slice(self) -> Vec<String>;
}

impl ToSlice for Vec<String> {
    fn to_slice(self) -> Vec<String> {
        self
    }
}

impl ToSlice for &[String] {
    fn to_slice(self) -> Vec<String> {
        self.to_vec()
    }
}

impl ToSlice for Vec<&str> {
    fn to_slice(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl ToSlice for &[&str] {
    fn to_slice(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> ToSlice for [&str; N] {
    fn to_slice(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

macro_rules! impl_to_slice_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToSlice for $t {
                fn to_slice(self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }
        )*
    };
}

impl_to_slice_display!(
    &str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

/// JSON arrays made only of strings pass through; every other value
/// (including mixed arrays) becomes its single rendering. JSON strings
/// render without their quotes.
impl ToSlice for Value {
    fn to_slice(self) -> Vec<String> {
        match self {
            Value::Array(items) if items.iter().all(Value::is_string) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::String(s) => vec![s],
            other => vec![other.to_string()],
        }
    }
}
