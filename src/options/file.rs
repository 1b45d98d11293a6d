//! TOML options file parsing.
//!
//! Defines the on-disk structure of an options file with serde.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::{NumberFormat, ParseOptions, defaults, validate_comment_chars};

/// Root structure of a TOML options file.
///
/// All fields are optional; missing fields keep their defaults.
///
/// ```toml
/// [comments]
/// chars = ["#", ";"]
/// ignore_inline = false
/// ignore_pre = false
///
/// [numbers]
/// decimal_separator = ","
/// group_separator = "."
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    /// Comment handling section
    #[serde(default)]
    pub comments: CommentsSection,

    /// Number format section
    #[serde(default)]
    pub numbers: NumbersSection,
}

/// Comment handling section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentsSection {
    /// Characters that start a comment
    pub chars: Option<Vec<char>>,

    /// Leave inline comments in the parsed content
    #[serde(default)]
    pub ignore_inline: bool,

    /// Skip comment lines instead of keeping them as pre-comments
    #[serde(default)]
    pub ignore_pre: bool,
}

/// Number format section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumbersSection {
    /// Decimal separator (default: `.`)
    pub decimal_separator: Option<char>,

    /// Digit group separator (default: `,` when `decimal_separator` is
    /// omitted, otherwise none)
    pub group_separator: Option<char>,
}

impl OptionsFile {
    /// Loads an options file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses an options file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Validates the file contents and builds [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty or NUL-containing
    /// comment set, or equal number separators.
    pub fn into_options(self) -> Result<ParseOptions> {
        let comment_chars = self
            .comments
            .chars
            .unwrap_or_else(|| defaults::COMMENT_CHARS.to_vec());
        validate_comment_chars(&comment_chars)?;

        // The invariant group separator only applies while the decimal
        // separator is also left at its default.
        let number_format = match self.numbers.decimal_separator {
            None => NumberFormat::new(
                defaults::DECIMAL_SEPARATOR,
                self.numbers
                    .group_separator
                    .or(Some(defaults::GROUP_SEPARATOR)),
            )?,
            Some(decimal) => NumberFormat::new(decimal, self.numbers.group_separator)?,
        };

        Ok(ParseOptions {
            comment_chars,
            ignore_inline_comments: self.comments.ignore_inline,
            ignore_pre_comments: self.comments.ignore_pre,
            number_format,
        })
    }
}
