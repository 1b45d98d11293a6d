//! Parse and conversion options.
//!
//! This module provides:
//! - Per-call parsing options ([`ParseOptions`])
//! - Numeric formatting rules for value conversion ([`NumberFormat`])
//! - Loading options from a TOML file ([`OptionsFile`])
//! - Default values ([`defaults`])
//!
//! Options are plain values passed into every parse and conversion call.
//! Nothing is stored globally, so two parses with different options can run
//! side by side without affecting each other.

pub mod defaults;
mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::{CommentsSection, NumbersSection, OptionsFile};

use std::path::Path;

use crate::error::{Error, Result};

/// Rules for reading and writing numbers in setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_separator: char,
    group_separator: Option<char>,
}

impl NumberFormat {
    /// Culture-independent format: `.` as decimal separator, `,` between
    /// digit groups.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            decimal_separator: defaults::DECIMAL_SEPARATOR,
            group_separator: Some(defaults::GROUP_SEPARATOR),
        }
    }

    /// Creates a format with the given separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the separators are equal.
    pub fn new(decimal_separator: char, group_separator: Option<char>) -> Result<Self> {
        if group_separator == Some(decimal_separator) {
            return Err(Error::invalid_argument(format!(
                "decimal and group separators must differ (both are {decimal_separator:?})"
            )));
        }

        Ok(Self {
            decimal_separator,
            group_separator,
        })
    }

    /// The character separating integer and fractional digits.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// The character separating digit groups, if any.
    #[must_use]
    pub const fn group_separator(&self) -> Option<char> {
        self.group_separator
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

/// Options controlling how configuration text is parsed and values converted.
///
/// # Examples
///
/// ```
/// use sharpini::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_comment_chars(['#'])
///     .unwrap()
///     .ignore_inline_comments(true);
///
/// assert_eq!(options.comment_chars(), &['#']);
/// assert!(options.inline_comments_ignored());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    comment_chars: Vec<char>,
    ignore_inline_comments: bool,
    ignore_pre_comments: bool,
    number_format: NumberFormat,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment_chars: defaults::COMMENT_CHARS.to_vec(),
            ignore_inline_comments: false,
            ignore_pre_comments: false,
            number_format: NumberFormat::invariant(),
        }
    }
}

impl ParseOptions {
    /// Creates options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of characters that start a comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the set is empty or contains `'\0'`.
    pub fn with_comment_chars(mut self, chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        validate_comment_chars(&chars)?;
        self.comment_chars = chars;
        Ok(self)
    }

    /// Sets whether inline comments are left in place instead of being parsed.
    #[must_use]
    pub const fn ignore_inline_comments(mut self, ignore: bool) -> Self {
        self.ignore_inline_comments = ignore;
        self
    }

    /// Sets whether comment lines are skipped instead of being kept as pre-comments.
    #[must_use]
    pub const fn ignore_pre_comments(mut self, ignore: bool) -> Self {
        self.ignore_pre_comments = ignore;
        self
    }

    /// Sets the numeric format used by value conversion.
    #[must_use]
    pub const fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    #[must_use]
    pub fn comment_chars(&self) -> &[char] {
        &self.comment_chars
    }

    /// Returns `true` if `c` starts a comment under these options.
    #[must_use]
    pub fn is_comment_char(&self, c: char) -> bool {
        self.comment_chars.contains(&c)
    }

    #[must_use]
    pub const fn inline_comments_ignored(&self) -> bool {
        self.ignore_inline_comments
    }

    #[must_use]
    pub const fn pre_comments_ignored(&self) -> bool {
        self.ignore_pre_comments
    }

    #[must_use]
    pub const fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or describes invalid options.
    pub fn load(path: &Path) -> Result<Self> {
        OptionsFile::load(path)?.into_options()
    }

    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or describes invalid options.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        OptionsFile::parse(content)?.into_options()
    }
}

pub(crate) fn validate_comment_chars(chars: &[char]) -> Result<()> {
    if chars.is_empty() {
        return Err(Error::invalid_argument(
            "the comment chars set must not be empty",
        ));
    }

    if chars.contains(&'\0') {
        return Err(Error::invalid_argument(
            "the comment chars set must not contain the NUL character",
        ));
    }

    Ok(())
}
