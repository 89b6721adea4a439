// Value types describing which sequence to build

use serde::Deserialize;

/// Clipboard buffer targeted by the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Clipboard {
    /// The system clipboard
    #[default]
    System,
    /// The primary selection (X11)
    Primary,
}

impl Clipboard {
    /// Selection designator written into the OSC 52 header
    pub fn designator(self) -> char {
        match self {
            Clipboard::System => 'c',
            Clipboard::Primary => 'p',
        }
    }
}

/// What the terminal is asked to do with the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Replace the clipboard with the request content
    #[default]
    Set,
    /// Ask the terminal to report the clipboard content
    Query,
    /// Empty the clipboard
    Clear,
}

/// Multiplexer envelope placed around the OSC 52 sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Bare terminal, no envelope
    #[default]
    None,
    /// GNU screen, carried inside DCS strings
    Screen,
    /// tmux passthrough. Not needed when tmux runs with `set-clipboard on`.
    Tmux,
}

impl WrapMode {
    /// Bytes opening the envelope
    pub fn prefix(self) -> &'static str {
        match self {
            WrapMode::None => "",
            WrapMode::Screen => "\x1bP",
            WrapMode::Tmux => "\x1bPtmux;\x1b",
        }
    }

    /// Bytes closing the envelope (the DCS string terminator)
    pub fn suffix(self) -> &'static str {
        match self {
            WrapMode::None => "",
            WrapMode::Screen | WrapMode::Tmux => "\x1b\\",
        }
    }

    /// Pick the envelope for the multiplexer we are running under
    ///
    /// `TMUX` wins over `STY` when both are set, since tmux started inside
    /// screen is the innermost layer.
    pub fn detect() -> Self {
        let mode = Self::from_env_flags(
            std::env::var_os("TMUX").is_some(),
            std::env::var_os("STY").is_some(),
        );

        #[cfg(debug_assertions)]
        log::debug!("Detected wrap mode {:?}", mode);

        mode
    }

    fn from_env_flags(in_tmux: bool, in_screen: bool) -> Self {
        if in_tmux {
            WrapMode::Tmux
        } else if in_screen {
            WrapMode::Screen
        } else {
            WrapMode::None
        }
    }
}
