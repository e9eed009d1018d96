// SPDX-License-Identifier: MIT
//
// Render options: which terminal capability tier to target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Glyphs and line breaks only, no escape sequences.
    Text,
    /// 8 colors plus bold/blink for the bright half (SGR 30–37 / 40–47).
    #[serde(alias = "ansi", alias = "16")]
    Ansi16,
    /// xterm 256-color palette (SGR 38;5 / 48;5).
    #[default]
    #[serde(alias = "256")]
    Xterm256,
    /// 24-bit color (SGR 38;2 / 48;2).
    #[serde(alias = "24bit")]
    Truecolor,
}

impl Tier {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ansi16 => "ansi16",
            Self::Xterm256 => "xterm256",
            Self::Truecolor => "truecolor",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tier name that [`Tier::from_str`] does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color tier {0:?} (expected text, ansi16, xterm256 or truecolor)")]
pub struct ParseTierError(String);

impl FromStr for Tier {
    type Err = ParseTierError;

    /// Case-insensitive; accepts the short forms `ansi`, `16`, `256` and
    /// `24bit` as well as the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "ansi16" | "ansi" | "16" => Ok(Self::Ansi16),
            "xterm256" | "256" => Ok(Self::Xterm256),
            "truecolor" | "24bit" => Ok(Self::Truecolor),
            _ => Err(ParseTierError(s.to_owned())),
        }
    }
}

/// Options for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Requested tier. A grid without color always renders as text.
    pub tier: Tier,
}

impl RenderOptions {
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self { tier }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
