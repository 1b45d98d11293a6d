//! Encoder and decoder for the binary layout.

use std::str::from_utf8;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::model::element::Header;
use crate::model::{Comment, Configuration, Element, Section, Setting};

/// Encodes `config` into its binary form.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a collection or string is too
/// large for the 32-bit lengths of the layout.
pub fn encode(config: &Configuration) -> Result<Bytes> {
    let mut bytes = BytesMut::with_capacity(256);

    put_count(&mut bytes, config.len())?;

    for section in config {
        put_string(&mut bytes, section.name())?;
        put_count(&mut bytes, section.len())?;
        put_comment(&mut bytes, section.comment())?;
        put_pre_comments(&mut bytes, section.pre_comments())?;

        for setting in section {
            put_string(&mut bytes, setting.name())?;
            put_string(&mut bytes, setting.raw_value())?;
            put_comment(&mut bytes, setting.comment())?;
            put_pre_comments(&mut bytes, setting.pre_comments())?;
        }
    }

    trace!(bytes = bytes.len(), sections = config.len(), "Encoded configuration");
    Ok(bytes.freeze())
}

fn put_count(bytes: &mut BytesMut, count: usize) -> Result<()> {
    let count = i32::try_from(count)
        .map_err(|_| Error::invalid_argument(format!("{count} elements exceed the binary format")))?;
    bytes.put_i32_le(count);
    Ok(())
}

fn put_string(bytes: &mut BytesMut, value: &str) -> Result<()> {
    let len = u32::try_from(value.len())
        .ok()
        .filter(|len| i32::try_from(*len).is_ok())
        .ok_or_else(|| Error::invalid_argument("string is too long for the binary format"))?;

    put_varint(bytes, len);
    bytes.put_slice(value.as_bytes());
    Ok(())
}

fn put_varint(bytes: &mut BytesMut, mut value: u32) {
    while value >= 0x80 {
        #[allow(clippy::cast_possible_truncation)]
        bytes.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    #[allow(clippy::cast_possible_truncation)]
    bytes.put_u8(value as u8);
}

fn put_char(bytes: &mut BytesMut, c: char) {
    let mut buf = [0; 4];
    bytes.put_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn put_comment(bytes: &mut BytesMut, comment: Option<&Comment>) -> Result<()> {
    match comment {
        Some(comment) => {
            bytes.put_u8(1);
            put_char(bytes, comment.symbol());
            put_string(bytes, comment.text())?;
        }
        None => bytes.put_u8(0),
    }
    Ok(())
}

fn put_pre_comments(bytes: &mut BytesMut, comments: &[Comment]) -> Result<()> {
    put_count(bytes, comments.len())?;
    for comment in comments {
        put_char(bytes, comment.symbol());
        put_string(bytes, comment.text())?;
    }
    Ok(())
}

/// Decodes a configuration from its binary form.
///
/// Bytes after the last section are ignored.
///
/// # Errors
///
/// Returns [`Error::CorruptBinary`] if the data is truncated, a length is
/// negative or malformed, text is not valid UTF-8, a name is empty, or a
/// name repeats within its collection.
pub fn decode(data: &[u8]) -> Result<Configuration> {
    let mut reader = Reader::new(data);
    let mut config = Configuration::new();

    let section_count = reader.count()?;

    for _ in 0..section_count {
        let offset = reader.position;
        let name = reader.string()?;
        let setting_count = reader.count()?;
        let comment = reader.comment()?;
        let pre_comments = reader.pre_comments()?;

        let header = Reader::header(offset, name, comment, pre_comments)?;
        let mut section = Section::from_header(header);

        for _ in 0..setting_count {
            let offset = reader.position;
            let name = reader.string()?;
            let value = reader.string()?;
            let comment = reader.comment()?;
            let pre_comments = reader.pre_comments()?;

            let header = Reader::header(offset, name, comment, pre_comments)?;
            let setting = Setting::from_header(header, value);

            section
                .add(setting)
                .map_err(|e| Reader::corrupt_at(offset, e.to_string()))?;
        }

        config
            .add(section)
            .map_err(|e| Reader::corrupt_at(offset, e.to_string()))?;
    }

    if reader.remaining() > 0 {
        warn!(
            trailing = reader.remaining(),
            "Ignoring bytes after the encoded configuration"
        );
    }

    trace!(bytes = reader.position, sections = config.len(), "Decoded configuration");
    Ok(config)
}

/// Bounds-checked cursor over the encoded bytes.
struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn corrupt_at(offset: usize, reason: impl Into<String>) -> Error {
        Error::CorruptBinary {
            offset,
            reason: reason.into(),
        }
    }

    fn corrupt(&self, reason: impl Into<String>) -> Error {
        Self::corrupt_at(self.position, reason)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| {
                self.corrupt(format!(
                    "expected {len} more bytes, found {}",
                    self.remaining()
                ))
            })?;

        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn count(&mut self) -> Result<usize> {
        let offset = self.position;
        let raw = self.take(4)?;
        let count = i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);

        usize::try_from(count)
            .map_err(|_| Self::corrupt_at(offset, format!("negative count {count}")))
    }

    fn varint(&mut self) -> Result<u32> {
        let offset = self.position;
        let mut value = 0u32;

        for shift in (0..28).step_by(7) {
            let byte = self.u8()?;
            value |= u32::from(byte & 0x7F) << shift;

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        // The fifth byte holds the top bits of a non-negative i32.
        let byte = self.u8()?;
        if byte > 0x07 {
            return Err(Self::corrupt_at(
                offset,
                "string length is not a valid 7-bit encoded integer",
            ));
        }

        Ok(value | (u32::from(byte) << 28))
    }

    fn string(&mut self) -> Result<String> {
        let len = self.varint()? as usize;
        let offset = self.position;
        let raw = self.take(len)?;

        from_utf8(raw)
            .map(str::to_owned)
            .map_err(|e| Self::corrupt_at(offset, format!("invalid UTF-8: {e}")))
    }

    fn char(&mut self) -> Result<char> {
        let offset = self.position;
        let lead = self.u8()?;

        let width = match lead {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(Self::corrupt_at(offset, format!("invalid UTF-8 lead byte {lead:#04x}"))),
        };

        self.position = offset;
        let raw = self.take(width)?;

        from_utf8(raw)
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| Self::corrupt_at(offset, "invalid UTF-8 character"))
    }

    fn comment_body(&mut self) -> Result<Comment> {
        let offset = self.position;
        let symbol = self.char()?;
        let text = self.string()?;

        Comment::new(symbol, text).map_err(|e| Self::corrupt_at(offset, e.to_string()))
    }

    fn comment(&mut self) -> Result<Option<Comment>> {
        let offset = self.position;

        match self.u8()? {
            0 => Ok(None),
            1 => self.comment_body().map(Some),
            flag => Err(Self::corrupt_at(offset, format!("invalid comment flag {flag}"))),
        }
    }

    fn pre_comments(&mut self) -> Result<Vec<Comment>> {
        let count = self.count()?;
        // Each entry needs at least two bytes, which bounds the allocation.
        let mut comments = Vec::with_capacity(count.min(self.remaining() / 2));

        for _ in 0..count {
            comments.push(self.comment_body()?);
        }

        Ok(comments)
    }

    fn header(
        offset: usize,
        name: String,
        comment: Option<Comment>,
        pre_comments: Vec<Comment>,
    ) -> Result<Header> {
        let mut header = Header::new(name).map_err(|e| Self::corrupt_at(offset, e.to_string()))?;
        header.comment = comment;
        header.pre_comments = pre_comments;
        Ok(header)
    }
}
