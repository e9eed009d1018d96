// SPDX-License-Identifier: MIT
//
// Errors raised by palette matching.

use thiserror::Error;

/// Failure while matching colors against a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A nearest-color search was asked to pick from zero candidates.
    ///
    /// The built-in tier palettes are never empty, so this only surfaces
    /// when a caller supplies its own target palette.
    #[error("cannot match a color against an empty palette")]
    EmptyPalette,
}
