//! Character encodings for configuration text.

use std::borrow::Cow;

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Encoding of configuration text on disk or in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8, written without a byte order mark.
    #[default]
    Utf8,
    /// UTF-16 little endian, written with a byte order mark.
    Utf16Le,
    /// UTF-16 big endian, written with a byte order mark.
    Utf16Be,
}

impl TextEncoding {
    /// Guesses the encoding from a leading byte order mark.
    ///
    /// Data without a recognized mark is taken to be UTF-8.
    #[must_use]
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(BOM_UTF16_LE) {
            Self::Utf16Le
        } else if data.starts_with(BOM_UTF16_BE) {
            Self::Utf16Be
        } else {
            Self::Utf8
        }
    }

    const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => BOM_UTF8,
            Self::Utf16Le => BOM_UTF16_LE,
            Self::Utf16Be => BOM_UTF16_BE,
        }
    }

    /// Decodes `data`, skipping this encoding's byte order mark if present.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than rejected.
    #[must_use]
    pub fn decode(self, data: &[u8]) -> String {
        let data = data.strip_prefix(self.bom()).unwrap_or(data);

        match self {
            Self::Utf8 => String::from_utf8_lossy(data).into_owned(),
            Self::Utf16Le => decode_utf16(data, u16::from_le_bytes),
            Self::Utf16Be => decode_utf16(data, u16::from_be_bytes),
        }
    }

    /// Encodes `text`. UTF-16 output starts with a byte order mark.
    #[must_use]
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        match self {
            Self::Utf8 => Cow::Borrowed(text.as_bytes()),
            Self::Utf16Le => Cow::Owned(encode_utf16(text, BOM_UTF16_LE, u16::to_le_bytes)),
            Self::Utf16Be => Cow::Owned(encode_utf16(text, BOM_UTF16_BE, u16::to_be_bytes)),
        }
    }
}

fn decode_utf16(data: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = data.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();

    let units = chunks.map(|chunk| unit([chunk[0], chunk[1]]));

    let mut text = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect::<String>();

    // An odd trailing byte cannot form a code unit.
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }

    text
}

fn encode_utf16(text: &str, bom: &[u8], bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bom.len() + text.len() * 2);
    out.extend_from_slice(bom);

    for unit in text.encode_utf16() {
        out.extend_from_slice(&bytes(unit));
    }

    out
}
