//! Text form of a configuration.
//!
//! This module provides:
//! - The line-oriented parser ([`parse`])
//! - The serializer ([`serialize`])
//! - Byte-order-mark aware decoding and encoding ([`TextEncoding`])

mod encoding;
mod parser;
mod serializer;

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod serializer_tests;

use std::fmt;
use std::str::FromStr;

pub use encoding::TextEncoding;
pub use parser::parse;
pub use serializer::serialize;

use crate::error::{Error, Result};
use crate::model::Configuration;
use crate::options::ParseOptions;

impl Configuration {
    /// Parses configuration text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sharpini::{Configuration, ParseOptions};
    ///
    /// let config = Configuration::parse(
    ///     "[General]\nName=John ; the user's name",
    ///     &ParseOptions::default(),
    /// )
    /// .unwrap();
    ///
    /// let name = config.section("general").unwrap().setting("NAME").unwrap();
    /// assert_eq!(name.raw_value(), "John");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for the first malformed line.
    pub fn parse(source: &str, options: &ParseOptions) -> Result<Self> {
        parse(source, options)
    }

    /// Serializes the configuration, comments included.
    #[must_use]
    pub fn to_text(&self) -> String {
        serialize(self)
    }
}

impl FromStr for Configuration {
    type Err = Error;

    /// Parses with [`ParseOptions::default`].
    fn from_str(s: &str) -> Result<Self> {
        parse(s, &ParseOptions::default())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
