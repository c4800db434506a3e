//! Supported text encodings and their codecs
//!
//! The catalog is a fixed, ordered list. The user picks an entry by its
//! 1-based position; [`choose_encoding`] hands back the entry itself.

use encoding_rs::Encoding;

use crate::nav::SelectionOutcome;
use crate::ui::{InputError, Prompt};

/// A text encoding offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    /// UTF-16 little-endian
    Unicode,
    /// UTF-16 little-endian, listed under its explicit name
    Utf16,
    /// UTF-32 little-endian
    Utf32,
}

/// Catalog order as presented to the user
pub static ENCODINGS: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Unicode,
    TextEncoding::Utf16,
    TextEncoding::Utf32,
];

const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];

impl TextEncoding {
    /// Catalog entry at a zero-based index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        ENCODINGS.get(index).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Unicode => "Unicode",
            Self::Utf16 => "UTF-16",
            Self::Utf32 => "UTF-32",
        }
    }

    /// Byte order mark written at the start of a new file
    #[must_use]
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Unicode | Self::Utf16 => &[0xFF, 0xFE],
            Self::Utf32 => UTF32LE_BOM,
        }
    }

    /// Decode a whole file.
    ///
    /// A byte order mark wins over the chosen encoding; malformed sequences
    /// become U+FFFD.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        if let Some(rest) = bytes.strip_prefix(UTF32LE_BOM) {
            return decode_utf32le(rest);
        }
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
            return text.into_owned();
        }
        let encoding = match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Unicode | Self::Utf16 => encoding_rs::UTF_16LE,
            Self::Utf32 => return decode_utf32le(bytes),
        };
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if had_errors {
            tracing::warn!("Decoding errors occurred with encoding {}", self.name());
        }
        text.into_owned()
    }

    /// Encode text without a byte order mark
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Unicode | Self::Utf16 => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf32 => text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect(),
        }
    }
}

fn decode_utf32le(bytes: &[u8]) -> String {
    let mut chunks = bytes.chunks_exact(4);
    let mut text: String = chunks
        .by_ref()
        .map(|c| {
            char::from_u32(u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    if !chunks.remainder().is_empty() {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Let the user pick an encoding from the catalog.
///
/// Only the listed positions are accepted.
///
/// # Errors
///
/// Returns error if reading from the terminal fails.
pub fn choose_encoding(prompt: &Prompt<'_>) -> Result<SelectionOutcome<TextEncoding>, InputError> {
    let output = prompt.output();
    output.clear();
    output.write("Available encodings:");
    for (i, encoding) in ENCODINGS.iter().enumerate() {
        output.write(&format!("{}) {}", i + 1, encoding.name()));
    }
    output.write("Enter the number of the encoding to use:");

    let picked = prompt
        .choose_number(ENCODINGS.len())?
        .and_then(|n| TextEncoding::from_index(n - 1));
    match picked {
        Some(encoding) => {
            output.success(&format!("Encoding {} selected.", encoding.name()));
            Ok(SelectionOutcome::Selected(encoding))
        }
        None => Ok(SelectionOutcome::Cancelled),
    }
}
