// SPDX-License-Identifier: MIT
//
// Tier encoders.
//
// Each tier is one function making a single row-major pass over the grid:
//
//   resolve cell colors → diff against TermState → emit changed channels → glyph
//
// The running state is a plain local accumulator owned by that pass. It
// starts at the tier default, is compared and updated per cell, has its
// background forced back to black at each row end, and decides at stream
// end whether a final reset is needed.
//
// The pieces shared by the quantizing tiers (16 and 256 colors) live here:
// the render-scoped `Quantizer` and the background blink derivation.

pub mod ansi16;
pub mod text;
pub mod truecolor;
pub mod xterm256;

use textmode_color::{LabPalette, LookupTable, Rgb};
use textmode_grid::{BlinkPolicy, ColorRef, Grid, GridError};

use crate::error::RenderError;

// ─── TermState ───────────────────────────────────────────────────────────────

/// Attributes the terminal currently has, as far as emitted output goes.
///
/// `C` is the tier's color representation: a palette index for the
/// quantizing tiers, an [`Rgb`] for truecolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermState<C> {
    pub fg: C,
    pub bg: C,
    pub blink: bool,
}

impl<C> TermState<C> {
    /// Initial state: given colors, blink off.
    #[inline]
    pub const fn new(fg: C, bg: C) -> Self {
        Self {
            fg,
            bg,
            blink: false,
        }
    }
}

// ─── Position ────────────────────────────────────────────────────────────────

/// Cell coordinates, carried for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct At {
    pub row: usize,
    pub column: usize,
}

impl At {
    pub(crate) const fn out_of_range(self, index: u8, len: usize) -> GridError {
        GridError::PaletteIndexOutOfRange {
            index,
            len,
            row: self.row,
            column: self.column,
        }
    }
}

// ─── Blink ───────────────────────────────────────────────────────────────────

/// Split an index-mode background of 8 or above into color and blink.
///
/// The color is always `raw − 8`. The bright bit carries blink under `On`
/// and is dropped under `Off`.
///
/// Indices below 8 and direct colors pass through without blink.
#[must_use]
pub fn split_blink(bg: ColorRef, policy: BlinkPolicy) -> (ColorRef, bool) {
    match bg {
        ColorRef::Index(raw) if raw >= 8 => {
            (ColorRef::Index(raw - 8), matches!(policy, BlinkPolicy::On))
        }
        other => (other, false),
    }
}

// ─── Quantizer ───────────────────────────────────────────────────────────────

/// Render-scoped color resolver for a fixed target palette.
///
/// Index-mode colors go through a [`LookupTable`] built once from the grid's
/// palette (or, for palette types whose indices carry no meaning, from the
/// target palette onto itself). Direct colors are matched per cell.
pub struct Quantizer {
    lookup: LookupTable,
    target: LabPalette,
}

impl Quantizer {
    /// Build the lookup table and Lab form of `target` for `grid`.
    ///
    /// `target` must have at most 256 entries; both tier palettes do.
    ///
    /// # Errors
    ///
    /// [`RenderError::Match`] if `target` is empty while there is something
    /// to match against it.
    pub fn new(grid: &Grid, target: &[Rgb]) -> Result<Self, RenderError> {
        debug_assert!(target.len() <= 256);

        let source = if grid.palette_type().uses_own_palette() {
            grid.palette().as_slice()
        } else {
            // Degenerate table: the target matched onto itself.
            target
        };
        let target = LabPalette::new(target);
        let lookup = LookupTable::build(source, &target)?;

        log::trace!(
            "lookup table: {} source colors onto {} target colors",
            lookup.len(),
            target.len()
        );

        Ok(Self { lookup, target })
    }

    /// Target palette index for a color channel.
    ///
    /// # Errors
    ///
    /// - [`GridError::PaletteIndexOutOfRange`] for an index past the lookup
    ///   table.
    /// - [`RenderError::Match`] if the target palette is empty.
    #[allow(clippy::cast_possible_truncation)] // Target palettes have ≤ 256 entries.
    pub fn resolve(&self, color: ColorRef, at: At) -> Result<u8, RenderError> {
        let idx = match color {
            ColorRef::Index(raw) => self
                .lookup
                .get(usize::from(raw))
                .ok_or_else(|| at.out_of_range(raw, self.lookup.len()))?,
            ColorRef::Direct(rgb) => self.target.nearest_rgb(rgb)?,
        };
        Ok(idx as u8)
    }

    #[must_use]
    pub const fn lookup(&self) -> &LookupTable {
        &self.lookup
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use textmode_color::{ANSI16, Palette, Rgb, XTERM256};
    use textmode_grid::{Cell, PaletteType};

    use super::*;

    fn grid(palette: Palette, palette_type: PaletteType) -> Grid {
        Grid::new(1, 1, vec![Cell::BLANK], palette)
            .unwrap()
            .with_palette_type(palette_type)
    }

    const AT: At = At { row: 0, column: 0 };

    // ── Blink ───────────────────────────────────────────────────────────

    #[test]
    fn low_backgrounds_never_blink() {
        for policy in [BlinkPolicy::On, BlinkPolicy::Off] {
            assert_eq!(
                split_blink(ColorRef::Index(7), policy),
                (ColorRef::Index(7), false)
            );
        }
    }

    #[test]
    fn high_background_with_blink_on_blinks_low_half() {
        assert_eq!(
            split_blink(ColorRef::Index(10), BlinkPolicy::On),
            (ColorRef::Index(2), true)
        );
    }

    #[test]
    fn indices_past_fifteen_also_lose_the_high_bit() {
        assert_eq!(
            split_blink(ColorRef::Index(200), BlinkPolicy::Off),
            (ColorRef::Index(192), false)
        );
        assert_eq!(
            split_blink(ColorRef::Index(200), BlinkPolicy::On),
            (ColorRef::Index(192), true)
        );
    }

    #[test]
    fn high_background_with_blink_off_drops_high_bit() {
        assert_eq!(
            split_blink(ColorRef::Index(10), BlinkPolicy::Off),
            (ColorRef::Index(2), false)
        );
    }

    #[test]
    fn direct_backgrounds_never_blink() {
        let white = ColorRef::Direct(Rgb::new(255, 255, 255));
        assert_eq!(split_blink(white, BlinkPolicy::On), (white, false));
    }

    // ── Quantizer ───────────────────────────────────────────────────────

    #[test]
    fn own_palette_feeds_the_lookup() {
        let q = Quantizer::new(&grid(Palette::ansi16(), PaletteType::Ansi), &XTERM256).unwrap();
        assert_eq!(q.lookup().len(), 16);
    }

    #[test]
    fn meaningless_indices_use_target_identity() {
        for palette_type in [PaletteType::Truecolor, PaletteType::None] {
            let q = Quantizer::new(&grid(Palette::default(), palette_type), &ANSI16).unwrap();
            assert_eq!(q.lookup().as_slice(), &(0..16).collect::<Vec<usize>>()[..]);
        }
    }

    #[test]
    fn index_past_palette_is_an_error() {
        let q = Quantizer::new(&grid(Palette::ansi16(), PaletteType::Ansi), &ANSI16).unwrap();
        let err = q.resolve(ColorRef::Index(16), At { row: 2, column: 5 }).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Grid(GridError::PaletteIndexOutOfRange {
                index: 16,
                len: 16,
                row: 2,
                column: 5
            })
        ));
    }

    #[test]
    fn direct_colors_match_per_cell() {
        let q = Quantizer::new(&grid(Palette::ansi16(), PaletteType::Ansi), &XTERM256).unwrap();
        assert_eq!(q.resolve(ColorRef::Direct(Rgb::new(255, 0, 0)), AT).unwrap(), 9);
        assert_eq!(q.resolve(ColorRef::Direct(Rgb::BLACK), AT).unwrap(), 0);
    }

    #[test]
    fn empty_target_fails_on_direct_color() {
        let q = Quantizer::new(&grid(Palette::default(), PaletteType::Custom), &[]).unwrap();
        let err = q.resolve(ColorRef::Direct(Rgb::BLACK), AT).unwrap_err();
        assert!(matches!(err, RenderError::Match(_)));
    }
}
