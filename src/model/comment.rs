//! Comment value object.

use std::fmt;

use crate::error::{Error, Result};

/// A comment attached to a section or setting.
///
/// Rendered as `"<symbol> <text>"`, e.g. `# window width`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    symbol: char,
    text: String,
}

impl Comment {
    /// Creates a comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `symbol` is the NUL character.
    pub fn new(symbol: char, text: impl Into<String>) -> Result<Self> {
        if symbol == '\0' {
            return Err(Error::invalid_argument(
                "comment symbol must not be the NUL character",
            ));
        }

        Ok(Self {
            symbol,
            text: text.into(),
        })
    }

    /// Builds a comment whose symbol is already known not to be NUL.
    pub(crate) fn from_parts(symbol: char, text: impl Into<String>) -> Self {
        debug_assert_ne!(symbol, '\0');
        Self {
            symbol,
            text: text.into(),
        }
    }

    /// The delimiter that introduced the comment.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The comment text, without its delimiter.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `symbol` is the NUL character.
    pub fn set_symbol(&mut self, symbol: char) -> Result<()> {
        if symbol == '\0' {
            return Err(Error::invalid_argument(
                "comment symbol must not be the NUL character",
            ));
        }

        self.symbol = symbol;
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.text)
    }
}
