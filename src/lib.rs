//! osc52seq library - OSC 52 clipboard escape sequences
//!
//! Builds the escape sequences that let a program set, query, or clear
//! the terminal clipboard, directly or through tmux and screen.
//!
//! ```
//! use osc52seq::{Osc52Request, WrapMode};
//!
//! let sequence = Osc52Request::new("hello world")
//!     .with_mode(WrapMode::Tmux)
//!     .encode();
//! assert_eq!(
//!     sequence.as_str(),
//!     "\x1bPtmux;\x1b\x1b]52;c;aGVsbG8gd29ybGQ=\x07\x1b\\"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod sequence;

// Re-export commonly used types for convenience
pub use error::Osc52Error;
pub use sequence::{
    Clipboard, EncodedSequence, Operation, Osc52Request, TextEncoder, TextEncoding, WrapMode,
    encode,
};
