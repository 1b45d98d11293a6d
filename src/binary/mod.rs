//! Binary form of a configuration.
//!
//! The layout is a plain structural dump with no version tag:
//!
//! ```text
//! i32 section count
//! per section:
//!     string name
//!     i32 setting count
//!     comment block
//!     pre-comment block
//!     per setting:
//!         string name
//!         string raw value
//!         comment block
//!         pre-comment block
//! ```
//!
//! Integers are little endian. A string is its UTF-8 byte length as a
//! 7-bit variable-length integer followed by the bytes. A comment block is
//! one presence byte (`0` or `1`) and, when present, the symbol (as UTF-8)
//! and the text. A pre-comment block is an `i32` count followed by that
//! many symbol and text pairs.

mod codec;


pub use codec::{decode, encode};
