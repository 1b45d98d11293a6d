//! Conversion between raw setting text and typed values.
//!
//! This module provides:
//! - Typed decoding through the [`FromSettingValue`] trait
//! - Dynamic decoding through a closed set of kinds ([`ValueKind`] → [`Value`])
//! - Array literal detection and splitting ([`array_size`], [`array_elements`])
//! - Array literal rendering ([`encode_array`])
//!
//! # Scalar Rules
//!
//! - **Booleans** accept `on`/`yes`/`1` and `off`/`no`/`0` (any case)
//!   in addition to `true`/`false`.
//! - **Enumerations** drop any qualifying prefix up to the last `.`
//!   (`Mode.Fast` reads as `Fast`), then match member names case-sensitively.
//! - **Numbers** follow the caller's [`NumberFormat`].
//!
//! # Arrays
//!
//! An array literal is `{e1,e2,...}`. Element splitting is purely on commas;
//! quoted commas and nested braces are not recognized.

mod array;
mod scalar;

#[cfg(test)]
mod array_tests;

pub use array::{array_elements, array_size, encode_array};
pub use scalar::{FromSettingValue, enum_from_name, strip_enum_prefix};

use std::fmt;

use crate::error::ValueCastError;
use crate::options::NumberFormat;

/// Target kind for dynamic decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit floating point number.
    Float,
    /// Boolean, including the `on`/`off`/`yes`/`no`/`1`/`0` aliases.
    Boolean,
    /// Raw text, returned unchanged.
    Text,
    /// One of a fixed set of member names.
    Enumeration {
        /// Name reported in conversion errors
        type_name: &'static str,
        /// Valid member names
        members: &'static [&'static str],
    },
}

impl ValueKind {
    /// Human-readable name of the kind, used in conversion errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Enumeration { type_name, .. } => *type_name,
        }
    }
}

/// A decoded scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    /// Member name of an enumeration, with any qualifying prefix removed.
    Enumeration(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) | Self::Enumeration(v) => f.write_str(v),
        }
    }
}

/// Decodes a single raw value as the requested kind.
///
/// # Errors
///
/// Returns [`ValueCastError`] if the text is not a valid value of that kind.
pub fn decode(
    raw: &str,
    kind: &ValueKind,
    format: &NumberFormat,
) -> Result<Value, ValueCastError> {
    match *kind {
        ValueKind::Integer => i64::from_setting_value(raw, format).map(Value::Integer),
        ValueKind::Float => f64::from_setting_value(raw, format).map(Value::Float),
        ValueKind::Boolean => bool::from_setting_value(raw, format).map(Value::Boolean),
        ValueKind::Text => Ok(Value::Text(raw.to_owned())),
        ValueKind::Enumeration { type_name, members } => enum_from_name(raw, type_name, |name| {
            members
                .iter()
                .find(|member| **member == name)
                .map(|member| Value::Enumeration((*member).to_owned()))
        }),
    }
}

/// Decodes every element of an array literal as the requested kind.
///
/// Returns `Ok(None)` if `raw` is not a well-formed array literal.
///
/// # Errors
///
/// Returns [`ValueCastError`] for the first element that fails to convert.
pub fn decode_array(
    raw: &str,
    kind: &ValueKind,
    format: &NumberFormat,
) -> Result<Option<Vec<Value>>, ValueCastError> {
    let Some(elements) = array_elements(raw) else {
        return Ok(None);
    };

    elements
        .into_iter()
        .map(|element| decode(element, kind, format))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
