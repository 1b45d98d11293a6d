//! Array literal detection, splitting and rendering.

use std::fmt::Display;

/// Returns the number of elements if `raw` is a well-formed array literal.
///
/// A value is an array when, after trimming, it starts with `{`, ends with `}`,
/// does not end in `,}` and contains no two adjacent commas. `{}` is the
/// zero-length array.
///
/// # Examples
///
/// ```
/// use sharpini::convert::array_size;
///
/// assert_eq!(array_size("{}"), Some(0));
/// assert_eq!(array_size("{1,2,3}"), Some(3));
/// assert_eq!(array_size("{1,}"), None);
/// assert_eq!(array_size("1,2,3"), None);
/// assert_eq!(array_size("{1,,3}"), None);
/// ```
#[must_use]
pub fn array_size(raw: &str) -> Option<usize> {
    let bytes = raw.trim().as_bytes();
    let len = bytes.len();

    if len < 2 || bytes[0] != b'{' || bytes[len - 1] != b'}' {
        return None;
    }

    if bytes[len - 2] == b',' {
        return None;
    }

    if len == 2 {
        return Some(0);
    }

    let mut commas = 0;
    let mut previous_comma = None;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b',' {
            continue;
        }

        if previous_comma.is_some_and(|p| i - p == 1) {
            return None;
        }

        previous_comma = Some(i);
        commas += 1;
    }

    Some(commas + 1)
}

/// Splits a well-formed array literal into its element substrings.
///
/// Elements are not trimmed. Returns `None` if `raw` is not an array literal.
#[must_use]
pub fn array_elements(raw: &str) -> Option<Vec<&str>> {
    let size = array_size(raw)?;

    if size == 0 {
        return Some(Vec::new());
    }

    let trimmed = raw.trim();
    let inner = &trimmed[1..trimmed.len() - 1];

    Some(inner.split(',').collect())
}

/// Renders values as an array literal, `{e1,e2,...}`.
///
/// ```
/// use sharpini::convert::encode_array;
///
/// assert_eq!(encode_array(&[1, 2, 3]), "{1,2,3}");
/// assert_eq!(encode_array::<i32>(&[]), "{}");
/// ```
#[must_use]
pub fn encode_array<T: Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!("{{{joined}}}")
}
