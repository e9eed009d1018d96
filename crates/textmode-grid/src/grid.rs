// SPDX-License-Identifier: MIT
//
// Grid: the full character-cell image handed to the renderer.
//
// Flat `Vec<Cell>` with row-major indexing: `cells[y * columns + x]`. The
// renderer walks it strictly left-to-right, top-to-bottom, so rows are
// contiguous slices and iteration is a linear scan.
//
// A grid is immutable once built. Construction checks the shape; palette
// indices are checked lazily by whoever dereferences them (the renderer
// reports the first bad one with its position), or eagerly via
// `Grid::validate_indices`.

use serde::{Deserialize, Serialize};
use textmode_color::Palette;

use crate::cell::{Cell, ColorRef};
use crate::error::GridError;

// ─── PaletteType ─────────────────────────────────────────────────────────────

/// How the source image describes its colors.
///
/// Decides where index-mode colors are resolved from. Every variant must
/// have an answer in [`PaletteType::uses_own_palette`]; the match there is
/// exhaustive so a new variant cannot slip through unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    /// Classic 16-color ANSI art.
    #[default]
    Ansi,
    /// ANSI art that also carries direct 24-bit colors.
    AnsiWithTruecolor,
    /// Raw BIN dump: glyph/attribute pairs over the VGA palette.
    BinaryText,
    /// An image-supplied palette.
    Custom,
    /// Direct colors only; palette indices carry no meaning.
    Truecolor,
    /// No color information at all. Always rendered as plain text.
    None,
}

impl PaletteType {
    /// Whether index-mode colors address the grid's own palette.
    ///
    /// When `false`, indices are not meaningful for this image and index
    /// lookups degrade to matching the target palette against itself.
    #[must_use]
    pub const fn uses_own_palette(self) -> bool {
        match self {
            Self::Ansi | Self::AnsiWithTruecolor | Self::BinaryText | Self::Custom => true,
            Self::Truecolor | Self::None => false,
        }
    }

    /// Whether the image has any color at all.
    #[inline]
    #[must_use]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<u8> for PaletteType {
    type Error = GridError;

    /// Map a loader's raw discriminant, in declaration order.
    fn try_from(raw: u8) -> Result<Self, GridError> {
        match raw {
            0 => Ok(Self::Ansi),
            1 => Ok(Self::AnsiWithTruecolor),
            2 => Ok(Self::BinaryText),
            3 => Ok(Self::Custom),
            4 => Ok(Self::Truecolor),
            5 => Ok(Self::None),
            other => Err(GridError::UnrecognizedPaletteType(other)),
        }
    }
}

// ─── BlinkPolicy ─────────────────────────────────────────────────────────────

/// What a background index of 8 or above means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlinkPolicy {
    /// The high bit of the background nibble is the blink bit.
    #[default]
    On,
    /// The blink bit is ignored; the background never blinks.
    Off,
}

impl From<bool> for BlinkPolicy {
    fn from(blink: bool) -> Self {
        if blink { Self::On } else { Self::Off }
    }
}

// ─── Grid ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    palette: Palette,
    palette_type: PaletteType,
    blink: BlinkPolicy,
}

impl Grid {
    /// Build a grid over `palette` with [`PaletteType::Ansi`] and
    /// [`BlinkPolicy::On`]; adjust with the `with_*` methods.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyDimensions`] if `rows` or `columns` is zero.
    /// - [`GridError::DimensionMismatch`] if `cells.len() != rows * columns`.
    pub fn new(
        rows: usize,
        columns: usize,
        cells: Vec<Cell>,
        palette: Palette,
    ) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimensions { rows, columns });
        }
        if rows.checked_mul(columns) != Some(cells.len()) {
            return Err(GridError::DimensionMismatch {
                rows,
                columns,
                cells: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
            palette,
            palette_type: PaletteType::default(),
            blink: BlinkPolicy::default(),
        })
    }

    #[must_use]
    pub const fn with_palette_type(mut self, palette_type: PaletteType) -> Self {
        self.palette_type = palette_type;
        self
    }

    #[must_use]
    pub const fn with_blink(mut self, blink: BlinkPolicy) -> Self {
        self.blink = blink;
        self
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn palette_type(&self) -> PaletteType {
        self.palette_type
    }

    #[inline]
    #[must_use]
    pub const fn blink(&self) -> BlinkPolicy {
        self.blink
    }

    /// Row `y` as a slice, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.columns)
    }

    /// Check every index-mode color against the grid's palette.
    ///
    /// Applies to every palette type with color, since the truecolor tier
    /// reads index-mode colors from the grid's palette whatever the type.
    /// A [`PaletteType::None`] grid renders as text and always passes.
    ///
    /// # Errors
    ///
    /// [`GridError::PaletteIndexOutOfRange`] for the first offending channel
    /// in scan order.
    pub fn validate_indices(&self) -> Result<(), GridError> {
        if !self.palette_type.has_color() {
            return Ok(());
        }
        let len = self.palette.len();
        for (y, row) in self.iter_rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                for channel in [cell.attr.fg, cell.attr.bg] {
                    match channel {
                        ColorRef::Index(index) if usize::from(index) >= len => {
                            return Err(GridError::PaletteIndexOutOfRange {
                                index,
                                len,
                                row: y,
                                column: x,
                            });
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cell::Attribute;

    fn blank_grid(rows: usize, columns: usize) -> Grid {
        Grid::new(rows, columns, vec![Cell::BLANK; rows * columns], Palette::ansi16()).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn new_checks_cell_count() {
        let err = Grid::new(2, 3, vec![Cell::BLANK; 5], Palette::ansi16()).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                rows: 2,
                columns: 3,
                cells: 5
            }
        );
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 4, vec![], Palette::ansi16()).unwrap_err(),
            GridError::EmptyDimensions { rows: 0, columns: 4 }
        );
        assert_eq!(
            Grid::new(4, 0, vec![], Palette::ansi16()).unwrap_err(),
            GridError::EmptyDimensions { rows: 4, columns: 0 }
        );
    }

    #[test]
    fn defaults_and_builders() {
        let grid = blank_grid(1, 1);
        assert_eq!(grid.palette_type(), PaletteType::Ansi);
        assert_eq!(grid.blink(), BlinkPolicy::On);

        let grid = grid
            .with_palette_type(PaletteType::Truecolor)
            .with_blink(BlinkPolicy::Off);
        assert_eq!(grid.palette_type(), PaletteType::Truecolor);
        assert_eq!(grid.blink(), BlinkPolicy::Off);
    }

    // ── Rows ────────────────────────────────────────────────────────────

    #[test]
    fn rows_are_row_major_slices() {
        let cells: Vec<Cell> = (0..6u8).map(|c| Cell::new(b'a' + c, Attribute::DEFAULT)).collect();
        let grid = Grid::new(2, 3, cells, Palette::ansi16()).unwrap();

        let codes = |row: &[Cell]| row.iter().map(|c| c.code).collect::<Vec<_>>();
        assert_eq!(codes(grid.row(0).unwrap()), b"abc".to_vec());
        assert_eq!(codes(grid.row(1).unwrap()), b"def".to_vec());
        assert!(grid.row(2).is_none());
        assert_eq!(grid.iter_rows().count(), 2);
    }

    // ── Index validation ────────────────────────────────────────────────

    #[test]
    fn validate_reports_first_bad_index() {
        let mut cells = vec![Cell::BLANK; 4];
        cells[3].attr = Attribute::indexed(7, 16);
        let grid = Grid::new(2, 2, cells, Palette::ansi16()).unwrap();
        assert_eq!(
            grid.validate_indices(),
            Err(GridError::PaletteIndexOutOfRange {
                index: 16,
                len: 16,
                row: 1,
                column: 1
            })
        );
    }

    #[test]
    fn validate_checks_truecolor_grids_against_their_palette() {
        let grid = Grid::new(1, 1, vec![Cell::BLANK], Palette::default())
            .unwrap()
            .with_palette_type(PaletteType::Truecolor);
        assert_eq!(
            grid.validate_indices(),
            Err(GridError::PaletteIndexOutOfRange {
                index: 7,
                len: 0,
                row: 0,
                column: 0
            })
        );
    }

    #[test]
    fn validate_skips_colorless_grids() {
        let cells = vec![Cell::new(b'x', Attribute::indexed(200, 200))];
        let grid = Grid::new(1, 1, cells, Palette::default())
            .unwrap()
            .with_palette_type(PaletteType::None);
        assert_eq!(grid.validate_indices(), Ok(()));
    }

    #[test]
    fn validate_ignores_direct_colors() {
        let cells = vec![Cell::new(
            b'x',
            Attribute::direct(textmode_color::Rgb::BLACK, textmode_color::Rgb::BLACK),
        )];
        let grid = Grid::new(1, 1, cells, Palette::default()).unwrap();
        assert_eq!(grid.validate_indices(), Ok(()));
    }

    // ── PaletteType / BlinkPolicy ───────────────────────────────────────

    #[test]
    fn palette_type_lookup_source() {
        assert!(PaletteType::Ansi.uses_own_palette());
        assert!(PaletteType::AnsiWithTruecolor.uses_own_palette());
        assert!(PaletteType::BinaryText.uses_own_palette());
        assert!(PaletteType::Custom.uses_own_palette());
        assert!(!PaletteType::Truecolor.uses_own_palette());
        assert!(!PaletteType::None.uses_own_palette());
        assert!(!PaletteType::None.has_color());
    }

    #[test]
    fn palette_type_from_raw() {
        assert_eq!(PaletteType::try_from(0), Ok(PaletteType::Ansi));
        assert_eq!(PaletteType::try_from(5), Ok(PaletteType::None));
        assert_eq!(
            PaletteType::try_from(6),
            Err(GridError::UnrecognizedPaletteType(6))
        );
    }

    #[test]
    fn blink_policy_from_bool() {
        assert_eq!(BlinkPolicy::from(true), BlinkPolicy::On);
        assert_eq!(BlinkPolicy::from(false), BlinkPolicy::Off);
    }
}
