//! Color tokens for events.
//!
//! Events carry a symbolic [`ColorToken`]; the display color is looked up
//! from the token so no view has to know about styling class names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic event color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    #[default]
    Blue,
    Indigo,
    Purple,
    Green,
    Red,
    Orange,
    Cyan,
    Amber,
    /// Used for events synced from reminders.
    Rose,
}

impl ColorToken {
    /// Colors handed out to freshly generated events.
    pub const PALETTE: [ColorToken; 8] = [
        ColorToken::Blue,
        ColorToken::Indigo,
        ColorToken::Purple,
        ColorToken::Green,
        ColorToken::Red,
        ColorToken::Orange,
        ColorToken::Cyan,
        ColorToken::Amber,
    ];

    /// Display color as `#rrggbb`.
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Blue => "#3b82f6",
            ColorToken::Indigo => "#6366f1",
            ColorToken::Purple => "#a855f7",
            ColorToken::Green => "#22c55e",
            ColorToken::Red => "#ef4444",
            ColorToken::Orange => "#f97316",
            ColorToken::Cyan => "#06b6d4",
            ColorToken::Amber => "#f59e0b",
            ColorToken::Rose => "#f43f5e",
        }
    }

    /// Display color as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Indigo => "indigo",
            ColorToken::Purple => "purple",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Orange => "orange",
            ColorToken::Cyan => "cyan",
            ColorToken::Amber => "amber",
            ColorToken::Rose => "rose",
        }
    }

    /// Accepts utility class names such as `bg-rose-500` as well as bare
    /// token names.
    pub fn from_class_name(class: &str) -> Option<Self> {
        let trimmed = class.trim();
        let name = trimmed
            .strip_prefix("bg-")
            .map(|rest| rest.split('-').next().unwrap_or(rest))
            .unwrap_or(trimmed);
        Self::all().find(|token| token.name().eq_ignore_ascii_case(name))
    }

    /// Reverse lookup from a display color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let wanted = hex.trim();
        Self::all().find(|token| token.hex().eq_ignore_ascii_case(wanted))
    }

    fn all() -> impl Iterator<Item = ColorToken> {
        Self::PALETTE.into_iter().chain(std::iter::once(ColorToken::Rose))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color token `{0}`")]
pub struct UnknownColorToken(pub String);

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class_name(s)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}
