//! Error types for parsing, value conversion and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for every fallible operation in the crate.
///
/// Variants group into the classes a host usually cares about:
/// parse failures, value conversion failures, kind mismatches,
/// invalid arguments and I/O (including corrupt binary data).
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A raw value could not be converted to the requested type.
    #[error(transparent)]
    ValueCast(#[from] ValueCastError),

    /// A scalar read was attempted on an array value or vice versa.
    #[error("{}", kind_mismatch_message(setting, *expected_array))]
    KindMismatch {
        /// Name of the setting that was read
        setting: String,
        /// Whether the caller asked for an array
        expected_array: bool,
    },

    /// An argument was rejected (empty name, empty comment set, NUL symbol, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A positional index was outside the collection.
    #[error("Index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Current collection length
        len: usize,
    },

    /// A section with an equal (case-insensitive) name already exists.
    #[error("The section '{0}' already exists in the configuration")]
    DuplicateSection(String),

    /// A setting with an equal (case-insensitive) name already exists.
    #[error("The setting '{0}' already exists in the section")]
    DuplicateSetting(String),

    /// No section with the given name exists.
    #[error("The section '{0}' does not exist in the configuration")]
    SectionNotFound(String),

    /// No setting with the given name exists.
    #[error("The setting '{0}' does not exist in the section")]
    SettingNotFound(String),

    /// Failed to read a configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a caller-supplied stream failed.
    #[error("Stream I/O failed: {0}")]
    Stream(#[source] std::io::Error),

    /// The binary stream is truncated or structurally invalid.
    #[error("Corrupt binary configuration at byte {offset}: {reason}")]
    CorruptBinary {
        /// Byte offset where decoding stopped
        offset: usize,
        /// What was wrong
        reason: String,
    },

    /// Failed to parse a TOML options file.
    #[error("Failed to parse options: {0}")]
    OptionsParse(#[from] toml::de::Error),
}

fn kind_mismatch_message(setting: &str, expected_array: bool) -> String {
    if expected_array {
        format!("Setting '{setting}' was read as an array, but its value is not an array")
    } else {
        format!("Setting '{setting}' was read as a single value, but its value is an array")
    }
}

impl Error {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Returns the parse error if this is one.
    #[must_use]
    pub const fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// A malformed line in configuration text.
///
/// Line numbers are 1-based and refer to physical lines of the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: {kind}")]
pub struct ParseError {
    /// Line on which parsing failed
    pub line: usize,
    /// What went wrong
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub(crate) const fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Reasons a line can be rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// `[` without a matching `]`.
    #[error("closing bracket missing")]
    MissingClosingBracket,

    /// Something follows the closing bracket of a section header.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// The section header has no name between its brackets.
    #[error("section name expected")]
    SectionNameExpected,

    /// A section with this name was declared earlier.
    #[error("the section '{0}' was already declared in the configuration")]
    DuplicateSection(String),

    /// A non-section line has no `=`.
    #[error("setting assignment expected")]
    AssignmentExpected,

    /// Nothing precedes the `=` of a setting line.
    #[error("setting name expected")]
    SettingNameExpected,

    /// A setting appears before any section header.
    #[error("the setting '{0}' has to be in a section")]
    SettingOutsideSection(String),

    /// A setting with this name was declared earlier in the same section.
    #[error("the setting '{0}' was already declared in the section")]
    DuplicateSetting(String),

    /// A `...` line with no setting to continue.
    #[error("continuation line has no preceding setting in the current section")]
    ContinuationWithoutSetting,
}

/// A raw value that cannot be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to cast value '{raw}' to type '{target}'")]
pub struct ValueCastError {
    /// The text that failed to convert
    pub raw: String,
    /// Name of the requested type
    pub target: &'static str,
}

impl ValueCastError {
    #[must_use]
    pub fn new(raw: impl Into<String>, target: &'static str) -> Self {
        Self {
            raw: raw.into(),
            target,
        }
    }
}
