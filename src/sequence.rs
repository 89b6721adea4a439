//! OSC 52 sequence construction
//!
//! Builds the escape sequences that set, query, or clear a terminal
//! clipboard buffer, with optional tmux/screen passthrough envelopes.
//!
//! The encoder is a pure function over an [`Osc52Request`]. Turning the
//! finished sequence into bytes is left to a [`TextEncoder`], and writing
//! those bytes to a sink lives in [`crate::output`].

mod encoder;
mod request;
pub mod text_encoding;
mod types;

pub use encoder::{EncodedSequence, encode};
pub use request::Osc52Request;
pub use text_encoding::{TextEncoder, TextEncoding};
pub use types::{Clipboard, Operation, WrapMode};
