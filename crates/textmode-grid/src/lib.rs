// SPDX-License-Identifier: MIT
//
// textmode-grid: the character-cell image that textmode renders.
//
// A `Grid` is what an external loader hands to the renderer: a row-major
// sequence of `Cell`s (code-page glyph + color attribute), the image's own
// palette, and the two loader-level switches that steer rendering:
//
//   PaletteType → where index-mode colors come from, and whether the image
//                 has colors at all (`None` forces plain-text output)
//   BlinkPolicy → whether background indices of 8 or above mean "blinking"
//
// Glyph codes are legacy 8-bit code-page values. Turning them into bytes a
// terminal can print is the job of a `GlyphMap`; `Cp437` is the stock one.

pub mod cell;
pub mod error;
pub mod glyph;
pub mod grid;

pub use cell::{Attribute, Cell, ColorRef};
pub use error::GridError;
pub use glyph::{Cp437, GlyphMap};
pub use grid::{BlinkPolicy, Grid, PaletteType};
