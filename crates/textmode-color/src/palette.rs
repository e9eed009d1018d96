// SPDX-License-Identifier: MIT
//
// Palettes: ordered color tables where the index is the attribute value.
//
// Two fixed target palettes ship with the crate:
//
//   ANSI16   → the 16 colors of a VGA text-mode console. The 16-color tier
//              quantizes into this table, and `30+n` / `40+n` (plus bold /
//              blink for 8–15) addresses it.
//
//   XTERM256 → xterm's 256-color table of 16 system colors, a 6×6×6 cube
//              (16–231) and a 24-step gray ramp (232–255). Built at compile
//              time from the cube and ramp formulas.
//
// Both are `const` data: no initialization order, no synchronization.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

// ─── Fixed Palettes ──────────────────────────────────────────────────────────

/// The 16-color VGA text-mode palette.
pub const ANSI16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // 0: Black
    Rgb::new(0xaa, 0x00, 0x00), // 1: Red
    Rgb::new(0x00, 0xaa, 0x00), // 2: Green
    Rgb::new(0xaa, 0x55, 0x00), // 3: Brown
    Rgb::new(0x00, 0x00, 0xaa), // 4: Blue
    Rgb::new(0xaa, 0x00, 0xaa), // 5: Magenta
    Rgb::new(0x00, 0xaa, 0xaa), // 6: Cyan
    Rgb::new(0xaa, 0xaa, 0xaa), // 7: Light gray
    Rgb::new(0x55, 0x55, 0x55), // 8: Dark gray
    Rgb::new(0xff, 0x55, 0x55), // 9: Bright red
    Rgb::new(0x55, 0xff, 0x55), // 10: Bright green
    Rgb::new(0xff, 0xff, 0x55), // 11: Yellow
    Rgb::new(0x55, 0x55, 0xff), // 12: Bright blue
    Rgb::new(0xff, 0x55, 0xff), // 13: Bright magenta
    Rgb::new(0x55, 0xff, 0xff), // 14: Bright cyan
    Rgb::new(0xff, 0xff, 0xff), // 15: White
];

/// xterm's system colors (indices 0–15 of the 256-color table).
const XTERM_SYSTEM: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x80, 0x00, 0x00),
    Rgb::new(0x00, 0x80, 0x00),
    Rgb::new(0x80, 0x80, 0x00),
    Rgb::new(0x00, 0x00, 0x80),
    Rgb::new(0x80, 0x00, 0x80),
    Rgb::new(0x00, 0x80, 0x80),
    Rgb::new(0xc0, 0xc0, 0xc0),
    Rgb::new(0x80, 0x80, 0x80),
    Rgb::new(0xff, 0x00, 0x00),
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0x00, 0x00, 0xff),
    Rgb::new(0xff, 0x00, 0xff),
    Rgb::new(0x00, 0xff, 0xff),
    Rgb::new(0xff, 0xff, 0xff),
];

/// The xterm 256-color palette.
pub const XTERM256: [Rgb; 256] = build_xterm256();

/// Cube axis levels: 0, 95, 135, 175, 215, 255.
const fn cube_level(step: u8) -> u8 {
    if step == 0 { 0 } else { 55 + 40 * step }
}

#[allow(clippy::cast_possible_truncation)] // Loop indices are bounded by 256.
const fn build_xterm256() -> [Rgb; 256] {
    let mut table = [Rgb::BLACK; 256];
    let mut i = 0;

    while i < 16 {
        table[i] = XTERM_SYSTEM[i];
        i += 1;
    }

    while i < 232 {
        let n = (i - 16) as u8;
        table[i] = Rgb::new(
            cube_level(n / 36),
            cube_level((n % 36) / 6),
            cube_level(n % 6),
        );
        i += 1;
    }

    while i < 256 {
        let v = 8 + 10 * (i - 232) as u8;
        table[i] = Rgb::new(v, v, v);
        i += 1;
    }

    table
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// An image's own color table, as produced by the loader.
///
/// Order is significant: a cell attribute's palette index addresses this
/// table directly. Lookups are bounds-checked via [`Palette::get`]; nothing
/// here clamps an index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    #[must_use]
    pub const fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// The VGA 16-color palette, the usual table for ANSI art.
    #[must_use]
    pub fn ansi16() -> Self {
        Self::new(ANSI16.to_vec())
    }

    /// The xterm 256-color palette.
    #[must_use]
    pub fn xterm256() -> Self {
        Self::new(XTERM256.to_vec())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.colors.iter()
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::new(colors)
    }
}

impl From<&[Rgb]> for Palette {
    fn from(colors: &[Rgb]) -> Self {
        Self::new(colors.to_vec())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
