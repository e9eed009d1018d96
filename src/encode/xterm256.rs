// SPDX-License-Identifier: MIT
//
// 256-color tier.
//
// Colors quantize into the xterm palette. Unlike the 16-color tier, each
// channel that changed gets its own sequence (`38;5;N`, `48;5;N`, blink
// toggle); nothing is merged.

use textmode_color::XTERM256;
use textmode_grid::{GlyphMap, Grid};

use super::{At, Quantizer, TermState, split_blink};
use crate::error::RenderError;
use crate::output::OutputBuffer;
use crate::sgr;

const DEFAULT: TermState<u8> = TermState::new(7, 0);

const BLACK: u8 = 0;

pub fn encode<G: GlyphMap + ?Sized>(
    grid: &Grid,
    glyphs: &G,
    out: &mut OutputBuffer,
) -> Result<(), RenderError> {
    sgr::reset(out)?;

    let quantizer = Quantizer::new(grid, &XTERM256)?;
    let mut state = DEFAULT;

    for (y, row) in grid.iter_rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let at = At { row: y, column: x };
            let fg = quantizer.resolve(cell.attr.fg, at)?;
            let (bg, blink) = split_blink(cell.attr.bg, grid.blink());
            let bg = quantizer.resolve(bg, at)?;

            if fg != state.fg {
                sgr::fg_indexed(out, fg)?;
                state.fg = fg;
            }
            if bg != state.bg {
                sgr::bg_indexed(out, bg)?;
                state.bg = bg;
            }
            if blink != state.blink {
                sgr::blink(out, blink)?;
                state.blink = blink;
            }

            out.push_bytes(glyphs.glyph(cell.code));
        }

        if state.bg != BLACK {
            sgr::bg_indexed(out, BLACK)?;
            state.bg = BLACK;
        }
        out.push_bytes(b"\n");
    }

    if state != DEFAULT {
        sgr::reset(out)?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
