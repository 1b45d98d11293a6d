//! sharpini: INI-style configuration files
//!
//! A library for reading, editing and writing hierarchical configuration
//! data (sections of named settings) in a human-editable text format and an
//! equivalent binary format. Comments and layout survive round trips.
//!
//! ```
//! use sharpini::{Configuration, NumberFormat, ParseOptions};
//!
//! let mut config = Configuration::parse(
//!     "[Video]\nWidth=1280 # pixels\nSizes={1,2,3}",
//!     &ParseOptions::default(),
//! )
//! .unwrap();
//!
//! let format = NumberFormat::invariant();
//! let video = config.section_mut("video").unwrap();
//! assert_eq!(video.setting("width").unwrap().get::<u32>(&format).unwrap(), 1280);
//!
//! video.entry("Fullscreen").unwrap().set(true);
//! assert_eq!(
//!     config.to_text(),
//!     "[Video]\nWidth=1280 # pixels\nSizes={1,2,3}\nFullscreen=true\n\n"
//! );
//! ```

pub mod binary;
pub mod convert;
mod error;
pub mod model;
pub mod options;
mod persist;
pub mod text;

pub use convert::{FromSettingValue, Value, ValueKind};
pub use error::{Error, ParseError, ParseErrorKind, Result, ValueCastError};
pub use model::{Comment, Configuration, Element, FieldMap, Section, Setting};
pub use options::{NumberFormat, ParseOptions};
pub use text::TextEncoding;
