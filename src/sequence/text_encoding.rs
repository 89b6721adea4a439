//! Text-to-bytes conversion for finished sequences
//!
//! The base64 payload inside a set request is always computed from UTF-8.
//! A [`TextEncoder`] only decides how the finished sequence (escape bytes
//! included) is laid out on the wire.

use clap::ValueEnum;
use serde::Deserialize;

/// Converts a finished sequence into the bytes written to a sink
pub trait TextEncoder {
    fn encode(&self, text: &str) -> Vec<u8>;
}

/// Built-in text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-16 little endian, no byte order mark
    #[value(name = "utf16le")]
    Utf16Le,
}

impl TextEncoder for TextEncoding {
    fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}
