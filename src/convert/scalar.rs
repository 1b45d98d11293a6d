//! Scalar conversions from raw setting text.

use crate::error::ValueCastError;
use crate::options::NumberFormat;

/// Types that can be read from a single raw setting value.
///
/// Implemented for all primitive integers, `f32`, `f64`, `bool`, `char`
/// and `String`. Host enumerations implement it through [`enum_from_name`]:
///
/// ```
/// use sharpini::convert::{FromSettingValue, enum_from_name};
/// use sharpini::{NumberFormat, ValueCastError};
///
/// #[derive(Debug, PartialEq)]
/// enum Quality { Low, High }
///
/// impl FromSettingValue for Quality {
///     const TYPE_NAME: &'static str = "Quality";
///
///     fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
///         enum_from_name(raw, Self::TYPE_NAME, |name| match name {
///             "Low" => Some(Self::Low),
///             "High" => Some(Self::High),
///             _ => None,
///         })
///     }
/// }
///
/// let format = NumberFormat::invariant();
/// assert_eq!(Quality::from_setting_value("Quality.High", &format), Ok(Quality::High));
/// assert!(Quality::from_setting_value("high", &format).is_err());
/// ```
pub trait FromSettingValue: Sized {
    /// Name reported in conversion errors.
    const TYPE_NAME: &'static str;

    /// Converts one raw value (or one array element).
    ///
    /// # Errors
    ///
    /// Returns [`ValueCastError`] if the text is not a valid value of this type.
    fn from_setting_value(raw: &str, format: &NumberFormat) -> Result<Self, ValueCastError>;
}

/// Removes a qualifying prefix such as `Type.` from an enumeration literal.
///
/// ```
/// use sharpini::convert::strip_enum_prefix;
///
/// assert_eq!(strip_enum_prefix("UriFormat.Unescaped"), "Unescaped");
/// assert_eq!(strip_enum_prefix(" Unescaped "), "Unescaped");
/// ```
#[must_use]
pub fn strip_enum_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();

    trimmed
        .rfind('.')
        .map_or(trimmed, |dot| trimmed[dot + 1..].trim())
}

/// Resolves an enumeration literal by member name.
///
/// The qualifying prefix is removed with [`strip_enum_prefix`] and the
/// remainder handed to `lookup`, which must match names case-sensitively.
///
/// # Errors
///
/// Returns [`ValueCastError`] carrying the original text if `lookup`
/// finds no member.
pub fn enum_from_name<E>(
    raw: &str,
    type_name: &'static str,
    lookup: impl FnOnce(&str) -> Option<E>,
) -> Result<E, ValueCastError> {
    lookup(strip_enum_prefix(raw)).ok_or_else(|| ValueCastError::new(raw, type_name))
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromSettingValue for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
                    raw.trim()
                        .parse::<$t>()
                        .map_err(|_| ValueCastError::new(raw, Self::TYPE_NAME))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Rewrites `raw` into the invariant float syntax understood by `str::parse`.
///
/// Group separators are dropped and the decimal separator becomes `.`.
/// A `.` that is neither separator makes the text invalid.
fn normalize_float(raw: &str, format: &NumberFormat) -> Option<String> {
    let decimal = format.decimal_separator();
    let group = format.group_separator();
    let mut normalized = String::with_capacity(raw.len());

    for c in raw.trim().chars() {
        if group == Some(c) {
            continue;
        }

        if c == decimal {
            normalized.push('.');
        } else if c == '.' {
            return None;
        } else {
            normalized.push(c);
        }
    }

    Some(normalized)
}

impl FromSettingValue for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn from_setting_value(raw: &str, format: &NumberFormat) -> Result<Self, ValueCastError> {
        normalize_float(raw, format)
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| ValueCastError::new(raw, Self::TYPE_NAME))
    }
}

impl FromSettingValue for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn from_setting_value(raw: &str, format: &NumberFormat) -> Result<Self, ValueCastError> {
        normalize_float(raw, format)
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| ValueCastError::new(raw, Self::TYPE_NAME))
    }
}

impl FromSettingValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "off" | "no" | "0" | "false" => Ok(false),
            "on" | "yes" | "1" | "true" => Ok(true),
            _ => Err(ValueCastError::new(raw, Self::TYPE_NAME)),
        }
    }
}

impl FromSettingValue for char {
    const TYPE_NAME: &'static str = "char";

    fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
        let mut chars = raw.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ValueCastError::new(raw, Self::TYPE_NAME)),
        }
    }
}

impl FromSettingValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_setting_value(raw: &str, _: &NumberFormat) -> Result<Self, ValueCastError> {
        Ok(raw.to_owned())
    }
}
