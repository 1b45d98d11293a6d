//! Loading and saving configurations from streams and files.
//!
//! File saves are atomic: the content is written to `{path}.tmp` first and
//! then renamed over `path`, so a reader never observes a half-written file.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::binary;
use crate::error::{Error, Result};
use crate::model::Configuration;
use crate::options::ParseOptions;
use crate::text::{self, TextEncoding};

impl Configuration {
    /// Reads and parses configuration text from `reader`.
    ///
    /// Without an explicit `encoding`, the encoding is detected from the
    /// byte order mark and defaults to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if reading fails, or [`Error::Parse`] if
    /// the text is malformed.
    pub fn from_reader<R: Read>(
        mut reader: R,
        encoding: Option<TextEncoding>,
        options: &ParseOptions,
    ) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(Error::Stream)?;
        parse_bytes(&data, encoding, options)
    }

    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read, or
    /// [`Error::Parse`] if its text is malformed.
    pub fn load(
        path: impl AsRef<Path>,
        encoding: Option<TextEncoding>,
        options: &ParseOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let data = read_file(path)?;

        let config = parse_bytes(&data, encoding, options)?;
        debug!(path = %path.display(), sections = config.len(), "Loaded configuration");
        Ok(config)
    }

    /// Serializes the configuration into `writer`.
    ///
    /// Defaults to UTF-8 without a byte order mark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W, encoding: Option<TextEncoding>) -> Result<()> {
        let text = self.to_text();
        let bytes = encoding.unwrap_or_default().encode(&text);

        writer.write_all(&bytes).map_err(Error::Stream)?;
        writer.flush().map_err(Error::Stream)
    }

    /// Serializes the configuration to a file, replacing it atomically.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if any file system step fails.
    pub fn save(&self, path: impl AsRef<Path>, encoding: Option<TextEncoding>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_text();
        let bytes = encoding.unwrap_or_default().encode(&text);

        write_atomic(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Saved configuration");
        Ok(())
    }

    /// Encodes the configuration in binary form.
    ///
    /// # Errors
    ///
    /// See [`binary::encode`].
    pub fn to_binary_bytes(&self) -> Result<Bytes> {
        binary::encode(self)
    }

    /// Decodes a configuration from binary form.
    ///
    /// # Errors
    ///
    /// See [`binary::decode`].
    pub fn from_binary_bytes(data: &[u8]) -> Result<Self> {
        binary::decode(data)
    }

    /// Writes the binary form into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if writing fails.
    pub fn write_binary<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_binary_bytes()?;

        writer.write_all(&bytes).map_err(Error::Stream)?;
        writer.flush().map_err(Error::Stream)
    }

    /// Reads `reader` to its end and decodes the binary form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if reading fails, or
    /// [`Error::CorruptBinary`] if the data is invalid.
    pub fn read_binary<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(Error::Stream)?;
        binary::decode(&data)
    }

    /// Writes the binary form to a file, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if any file system step fails.
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_binary_bytes()?;

        write_atomic(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Saved binary configuration");
        Ok(())
    }

    /// Loads a configuration file written by [`Configuration::save_binary`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file cannot be read, or
    /// [`Error::CorruptBinary`] if its content is invalid.
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read_file(path)?;

        let config = binary::decode(&data)?;
        debug!(path = %path.display(), sections = config.len(), "Loaded binary configuration");
        Ok(config)
    }
}

fn parse_bytes(
    data: &[u8],
    encoding: Option<TextEncoding>,
    options: &ParseOptions,
) -> Result<Configuration> {
    let encoding = encoding.unwrap_or_else(|| TextEncoding::detect(data));
    text::parse(&encoding.decode(data), options)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }

    // Append rather than replace the extension (app.ini -> app.ini.tmp)
    let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

    fs::write(&temp_path, bytes).map_err(write_error)?;
    fs::rename(&temp_path, path).map_err(write_error)
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;
