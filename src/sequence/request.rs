use std::fmt;

use super::encoder::{self, EncodedSequence};
use super::types::{Clipboard, Operation, WrapMode};

/// Description of the OSC 52 sequence to build
///
/// Requests are plain values: every `with_*` method consumes the request
/// and returns an updated copy, so a request can be shared across threads
/// and encoded any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Osc52Request {
    content: String,
    clipboard: Clipboard,
    operation: Operation,
    mode: WrapMode,
    limit: usize,
}

impl Osc52Request {
    /// Set request for `content` on the system clipboard
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set request whose content is `parts` joined with single spaces
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(join_parts(parts))
    }

    /// Query request for the system clipboard
    pub fn query() -> Self {
        Self::default().with_operation(Operation::Query)
    }

    /// Clear request for the system clipboard
    pub fn clear() -> Self {
        Self::default().with_operation(Operation::Clear)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn with_mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Maximum content length in characters, 0 for no limit
    ///
    /// Negative values clamp to 0. Content longer than the limit makes a
    /// set request encode to the empty sequence.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = clamp_limit(limit);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn clipboard(&self) -> Clipboard {
        self.clipboard
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn mode(&self) -> WrapMode {
        self.mode
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Encode this request, see [`encoder::encode`]
    pub fn encode(&self) -> EncodedSequence {
        encoder::encode(self)
    }
}

impl fmt::Display for Osc52Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(part.as_ref());
    }
    joined
}

fn clamp_limit(limit: i64) -> usize {
    if limit <= 0 {
        0
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
