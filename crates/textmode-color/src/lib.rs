// SPDX-License-Identifier: MIT
//
// textmode-color: the color model behind textmode rendering.
//
// Everything the encoder needs to turn a cell attribute into a terminal
// color lives here:
//
//   Rgb        → 8-bit sRGB triple, the only color type that reaches output
//   Lab        → CIE L*a*b* (D65), used purely for distance comparison
//   palette    → the fixed VGA-16 and xterm-256 tables, plus `Palette`
//   matcher    → Lab palettes, nearest-color search and index lookup tables
//
// The crate has no state. Palettes are compile-time constants, and every
// derived structure (Lab palettes, lookup tables) is owned by the caller and
// lives exactly as long as one render.

// Single-character variable names (r, g, b, l, a, x, y, z) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod lab;
pub mod matcher;
pub mod palette;
pub mod rgb;

pub use error::MatchError;
pub use lab::{Lab, to_lab};
pub use matcher::{LabPalette, LookupTable, nearest_match};
pub use palette::{ANSI16, Palette, XTERM256};
pub use rgb::Rgb;
