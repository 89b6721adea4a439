//! OSC 52 encoder
//!
//! Sequence layout:
//! - `{prefix}` - multiplexer envelope opener (empty, `ESC P`, or `ESC Ptmux; ESC`)
//! - `ESC ]52;` - OSC 52 introducer
//! - `{c|p};` - clipboard selection
//! - `{body}` - base64 content, `?` for query, `!` for clear
//! - `BEL` - OSC terminator
//! - `{suffix}` - multiplexer envelope closer (`ESC \`)

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::request::Osc52Request;
use super::text_encoding::TextEncoder;
use super::types::{Operation, WrapMode};

const OSC52_INTRODUCER: &str = "\x1b]52;";
const BEL: char = '\x07';

/// screen drops DCS strings with long lines, so the payload is re-framed
const SCREEN_CHUNK_LEN: usize = 76;

/// Closes the current DCS string and opens the next one
const SCREEN_CHUNK_SEPARATOR: &str = "\x1b\\\x1bP";

const QUERY_BODY: char = '?';

// Anything that is neither base64 nor "?" clears the clipboard
const CLEAR_BODY: char = '!';

/// A finished escape sequence
///
/// An empty sequence means the request was suppressed because its content
/// exceeded the length limit. It is a normal result, not an error: there
/// is simply nothing to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSequence(String);

impl EncodedSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing should be written
    pub fn is_suppressed(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Bytes to put on the wire using `encoder`
    pub fn to_bytes(&self, encoder: &dyn TextEncoder) -> Vec<u8> {
        encoder.encode(&self.0)
    }
}

impl fmt::Display for EncodedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the escape sequence described by `request`
///
/// Never fails. A set request whose content is longer than a non-zero
/// limit yields an empty (suppressed) sequence with no partial output.
pub fn encode(request: &Osc52Request) -> EncodedSequence {
    let mode = request.mode();
    let mut seq = String::new();

    seq.push_str(mode.prefix());
    seq.push_str(OSC52_INTRODUCER);
    seq.push(request.clipboard().designator());
    seq.push(';');

    match request.operation() {
        Operation::Set => {
            if exceeds_limit(request.content(), request.limit()) {
                #[cfg(debug_assertions)]
                log::debug!(
                    "Suppressing OSC 52 set: {} chars over limit {}",
                    char_len(request.content()),
                    request.limit()
                );
                return EncodedSequence::default();
            }

            let payload = STANDARD.encode(request.content());
            if mode == WrapMode::Screen {
                seq.push_str(&chunk_for_screen(&payload));
            } else {
                seq.push_str(&payload);
            }
        }
        Operation::Query => seq.push(QUERY_BODY),
        Operation::Clear => seq.push(CLEAR_BODY),
    }

    seq.push(BEL);
    seq.push_str(mode.suffix());

    EncodedSequence(seq)
}

/// Content length as UTF-16 code units
///
/// This is not the UTF-8 byte count, so for non-ASCII content the limit
/// does not bound the size of the base64 payload.
fn char_len(content: &str) -> usize {
    content.encode_utf16().count()
}

fn exceeds_limit(content: &str, limit: usize) -> bool {
    limit > 0 && char_len(content) > limit
}

/// Split `payload` into 76-char chunks, each carried by its own DCS string
fn chunk_for_screen(payload: &str) -> String {
    // base64 is ASCII, every index is a char boundary
    let mut chunks = Vec::with_capacity(payload.len() / SCREEN_CHUNK_LEN + 1);
    let mut start = 0;
    while start < payload.len() {
        let end = (start + SCREEN_CHUNK_LEN).min(payload.len());
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks.join(SCREEN_CHUNK_SEPARATOR)
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod encoder_tests;
