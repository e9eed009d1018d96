// SPDX-License-Identifier: MIT
//
// Errors raised while building or reading a grid.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid must have at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },

    /// The cell count does not equal `rows × columns`.
    #[error("grid is {rows}x{columns} but holds {cells} cells")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        cells: usize,
    },

    /// An index-mode color points past the end of the palette it addresses.
    #[error(
        "palette index {index} out of range (palette has {len} entries) at row {row}, column {column}"
    )]
    PaletteIndexOutOfRange {
        index: u8,
        len: usize,
        row: usize,
        column: usize,
    },

    /// A loader discriminant with no matching `PaletteType` variant.
    #[error("unrecognized palette type {0}")]
    UnrecognizedPaletteType(u8),
}
