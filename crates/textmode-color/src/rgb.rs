// SPDX-License-Identifier: MIT
//
// Rgb: the 8-bit sRGB triple carried by palettes and direct-color cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color.
///
/// This is what palettes store and what the truecolor tier writes out
/// verbatim. Comparison is exact channel equality, which is what the encoder
/// uses to decide whether a color changed between two cells.
///
/// ```
/// use textmode_color::Rgb;
///
/// let red = Rgb::new(0xaa, 0x00, 0x00);
/// assert_eq!(format!("{red}"), "#aa0000");
/// assert_ne!(red, Rgb::BLACK);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Pure black, the default background of every tier.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels normalized to `0.0..=1.0`.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
