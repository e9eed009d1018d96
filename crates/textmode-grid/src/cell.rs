// SPDX-License-Identifier: MIT
//
// Cell: one character position of a textmode image.
//
// Each cell pairs an 8-bit code-page glyph with a color attribute. A color is
// either an index into the image's palette (classic ANSI/BIN art) or a direct
// 24-bit value (images that carry truecolor extensions). The two channels of
// an attribute pick their mode independently.

use serde::{Deserialize, Serialize};
use textmode_color::Rgb;

// ─── ColorRef ────────────────────────────────────────────────────────────────

/// A color channel: palette slot or explicit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRef {
    /// Index into the grid's own palette.
    Index(u8),
    /// A direct 24-bit color, independent of any palette.
    Direct(Rgb),
}

impl ColorRef {
    /// The palette index, if this is an index-mode color.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<u8> {
        match self {
            Self::Index(idx) => Some(idx),
            Self::Direct(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_direct(self) -> bool {
        matches!(self, Self::Direct(_))
    }
}

impl From<u8> for ColorRef {
    fn from(idx: u8) -> Self {
        Self::Index(idx)
    }
}

impl From<Rgb> for ColorRef {
    fn from(rgb: Rgb) -> Self {
        Self::Direct(rgb)
    }
}

// ─── Attribute ───────────────────────────────────────────────────────────────

/// Foreground and background color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub fg: ColorRef,
    pub bg: ColorRef,
}

impl Attribute {
    /// Light gray on black (DOS attribute `0x07`).
    pub const DEFAULT: Self = Self::indexed(7, 0);

    #[inline]
    #[must_use]
    pub const fn new(fg: ColorRef, bg: ColorRef) -> Self {
        Self { fg, bg }
    }

    /// Both channels in index mode.
    #[inline]
    #[must_use]
    pub const fn indexed(fg: u8, bg: u8) -> Self {
        Self::new(ColorRef::Index(fg), ColorRef::Index(bg))
    }

    /// Both channels in direct mode.
    #[inline]
    #[must_use]
    pub const fn direct(fg: Rgb, bg: Rgb) -> Self {
        Self::new(ColorRef::Direct(fg), ColorRef::Direct(bg))
    }

    /// Split a DOS attribute byte: low nibble foreground, high nibble background.
    #[inline]
    #[must_use]
    pub const fn from_dos(byte: u8) -> Self {
        Self::indexed(byte & 0x0f, byte >> 4)
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A glyph code and its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Code-page glyph (0–255), mapped to text by a `GlyphMap`.
    pub code: u8,
    pub attr: Attribute,
}

impl Cell {
    /// A space in the default attribute.
    pub const BLANK: Self = Self::new(b' ', Attribute::DEFAULT);

    #[inline]
    #[must_use]
    pub const fn new(code: u8, attr: Attribute) -> Self {
        Self { code, attr }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
