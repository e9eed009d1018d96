// SPDX-License-Identifier: MIT
//
// Text tier: glyphs and line breaks, no escape sequences at all.

use textmode_grid::{GlyphMap, Grid};

use crate::output::OutputBuffer;

pub fn encode<G: GlyphMap + ?Sized>(grid: &Grid, glyphs: &G, out: &mut OutputBuffer) {
    for row in grid.iter_rows() {
        for cell in row {
            out.push_bytes(glyphs.glyph(cell.code));
        }
        out.push_bytes(b"\n");
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
