//! A single named value.

use std::fmt::{self, Display};

use crate::convert::{self, FromSettingValue, Value, ValueKind};
use crate::error::{Error, Result};
use crate::options::NumberFormat;
use crate::options::defaults::{CONTINUATION_MARKER, CONTINUATION_SEPARATOR};

use super::element::{Header, impl_element};

/// A named setting holding a raw string value.
///
/// The raw value is the only stored state; typed values are converted on
/// every read. Whether the value is an array is decided from its text
/// (see [`convert::array_size`]).
///
/// # Examples
///
/// ```
/// use sharpini::{NumberFormat, Setting};
///
/// let mut setting = Setting::with_value("Sizes", "{1,2,3}").unwrap();
/// assert_eq!(setting.array_size(), Some(3));
///
/// let sizes: Vec<u32> = setting.get_array(&NumberFormat::invariant()).unwrap();
/// assert_eq!(sizes, vec![1, 2, 3]);
///
/// setting.set(640);
/// assert_eq!(setting.get::<i32>(&NumberFormat::invariant()).unwrap(), 640);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub(crate) header: Header,
    raw_value: String,
}

impl_element!(Setting);

impl Setting {
    /// Creates a setting with an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_value(name, String::new())
    }

    /// Creates a setting with the given raw value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` is empty.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            header: Header::new(name)?,
            raw_value: value.into(),
        })
    }

    pub(crate) const fn from_header(header: Header, raw_value: String) -> Self {
        Self { header, raw_value }
    }

    /// The unparsed value text.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn set_raw_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    /// Appends one continuation line to the value.
    pub(crate) fn append_line(&mut self, text: &str) {
        self.raw_value.push_str(CONTINUATION_SEPARATOR);
        self.raw_value.push_str(text);
    }

    /// Number of array elements, or `None` if the value is not an array.
    #[must_use]
    pub fn array_size(&self) -> Option<usize> {
        convert::array_size(&self.raw_value)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array_size().is_some()
    }

    /// Reads the value as a single `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is an array, or
    /// [`Error::ValueCast`] if it cannot be converted.
    pub fn get<T: FromSettingValue>(&self, format: &NumberFormat) -> Result<T> {
        self.ensure_scalar()?;
        Ok(T::from_setting_value(&self.raw_value, format)?)
    }

    /// Reads the value as an array of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not an array, or
    /// [`Error::ValueCast`] for the first element that cannot be converted.
    pub fn get_array<T: FromSettingValue>(&self, format: &NumberFormat) -> Result<Vec<T>> {
        let elements = self.array_elements()?;

        elements
            .into_iter()
            .map(|element| T::from_setting_value(element, format).map_err(Error::from))
            .collect()
    }

    /// Reads the value as a single value of a dynamically chosen kind.
    ///
    /// # Errors
    ///
    /// Same as [`Setting::get`].
    pub fn decode(&self, kind: &ValueKind, format: &NumberFormat) -> Result<Value> {
        self.ensure_scalar()?;
        Ok(convert::decode(&self.raw_value, kind, format)?)
    }

    /// Reads the value as an array of a dynamically chosen kind.
    ///
    /// # Errors
    ///
    /// Same as [`Setting::get_array`].
    pub fn decode_array(&self, kind: &ValueKind, format: &NumberFormat) -> Result<Vec<Value>> {
        let elements = self.array_elements()?;

        elements
            .into_iter()
            .map(|element| convert::decode(element, kind, format).map_err(Error::from))
            .collect()
    }

    /// Stores `value` in its natural string form.
    pub fn set<T: Display>(&mut self, value: T) {
        self.raw_value = value.to_string();
    }

    /// Stores `values` as an array literal, `{e1,e2,...}`.
    pub fn set_array<T: Display>(&mut self, values: &[T]) {
        self.raw_value = convert::encode_array(values);
    }

    /// Renders the setting as it appears in configuration text.
    ///
    /// Multi-line values are written as `...` continuation lines. With
    /// `include_comments`, pre-comments precede the assignment and the
    /// inline comment follows its first line.
    #[must_use]
    pub fn render(&self, include_comments: bool) -> String {
        let mut lines = self.raw_value.split(CONTINUATION_SEPARATOR);
        let first = lines.next().unwrap_or_default();
        let assignment = format!("{}={first}", self.header.name);

        let mut rendered = self.header.render_around(&assignment, include_comments);

        for line in lines {
            rendered.push('\n');
            rendered.push_str(CONTINUATION_MARKER);
            rendered.push_str(line);
        }

        rendered
    }

    fn ensure_scalar(&self) -> Result<()> {
        if self.is_array() {
            return Err(Error::KindMismatch {
                setting: self.header.name.clone(),
                expected_array: false,
            });
        }

        Ok(())
    }

    fn array_elements(&self) -> Result<Vec<&str>> {
        convert::array_elements(&self.raw_value).ok_or_else(|| Error::KindMismatch {
            setting: self.header.name.clone(),
            expected_array: true,
        })
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
