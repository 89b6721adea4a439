// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

use crate::sequence::{Clipboard, TextEncoding, WrapMode};

/// Wrap mode preference, `auto` detects the multiplexer from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    None,
    Tmux,
    Screen,
}

impl ModeSetting {
    pub fn resolve(self) -> WrapMode {
        match self {
            ModeSetting::Auto => WrapMode::detect(),
            ModeSetting::None => WrapMode::None,
            ModeSetting::Tmux => WrapMode::Tmux,
            ModeSetting::Screen => WrapMode::Screen,
        }
    }
}

/// Sequence defaults section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SequenceConfig {
    #[serde(default)]
    pub clipboard: Clipboard,
    #[serde(default)]
    pub mode: ModeSetting,
    /// Negative values clamp to 0 (no limit) when the request is built
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub encoding: TextEncoding,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sequence: SequenceConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
