//! Command-line arguments for the `osc52` binary
//!
//! Flags override values from the config file, which override built-in
//! defaults.

use std::io::Read;

use clap::Parser;

use crate::config::{ModeSetting, SequenceConfig};
use crate::error::Osc52Error;
use crate::sequence::{Clipboard, Operation, Osc52Request, TextEncoding};

/// Set, query, or clear the terminal clipboard with OSC 52
#[derive(Parser, Debug)]
#[command(
    name = "osc52",
    version,
    about = "Set, query, or clear the terminal clipboard with OSC 52 escape sequences"
)]
pub struct Args {
    /// Content to copy, parts are joined with a space (read from stdin when omitted)
    pub content: Vec<String>,

    /// Target the primary selection (X11) instead of the system clipboard
    #[arg(short, long)]
    pub primary: bool,

    /// Ask the terminal to report the clipboard content
    #[arg(short, long, conflicts_with = "clear")]
    pub query: bool,

    /// Clear the clipboard
    #[arg(short, long)]
    pub clear: bool,

    /// Multiplexer envelope
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeSetting>,

    /// Maximum content length in characters, 0 or negative for no limit
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Encoding of the bytes written to the terminal
    #[arg(short, long, value_enum)]
    pub encoding: Option<TextEncoding>,

    /// Write to stdout instead of stderr
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    pub fn operation(&self) -> Operation {
        if self.query {
            Operation::Query
        } else if self.clear {
            Operation::Clear
        } else {
            Operation::Set
        }
    }

    /// True when set content has to come from stdin
    pub fn reads_stdin(&self) -> bool {
        self.operation() == Operation::Set && self.content.is_empty()
    }

    /// Encoding to write with, flag first then config
    pub fn encoding(&self, defaults: &SequenceConfig) -> TextEncoding {
        self.encoding.unwrap_or(defaults.encoding)
    }

    /// Build the request from flags, falling back to `defaults`
    ///
    /// `stdin_content` is used only when [`Args::reads_stdin`] is true.
    pub fn build_request(
        &self,
        defaults: &SequenceConfig,
        stdin_content: Option<String>,
    ) -> Osc52Request {
        let clipboard = if self.primary {
            Clipboard::Primary
        } else {
            defaults.clipboard
        };
        let mode = self.mode.unwrap_or(defaults.mode).resolve();
        let limit = self.limit.unwrap_or(defaults.limit);

        let request = match stdin_content {
            Some(content) if self.reads_stdin() => Osc52Request::new(content),
            _ => Osc52Request::from_parts(&self.content),
        };

        request
            .with_operation(self.operation())
            .with_clipboard(clipboard)
            .with_mode(mode)
            .with_limit(limit)
    }
}

/// Read all of `reader` as set content
pub fn read_content<R: Read>(mut reader: R) -> Result<String, Osc52Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes)
        .map_err(|_| Osc52Error::InvalidArgument("content is not valid UTF-8".to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
