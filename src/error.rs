// SPDX-License-Identifier: MIT
//
// Render errors.
//
// Inputs are expected to be validated by the loader, so the taxonomy is
// narrow. Nothing is recoverable mid-render: the first error aborts the
// render, and because output is buffered, the sink has received nothing.

use std::io;

use textmode_color::MatchError;
use textmode_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed grid data, most commonly an index-mode color past the end
    /// of its palette ([`GridError::PaletteIndexOutOfRange`]).
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Nearest-color search against an empty palette.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// The sink rejected the rendered bytes.
    #[error("failed to write rendered output")]
    Io(#[from] io::Error),
}
