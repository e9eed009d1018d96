// SPDX-License-Identifier: MIT
//
// Truecolor tier.
//
// No quantization: index-mode colors are looked up in the grid's palette and
// written as 24-bit triples, direct colors are written as they are. The
// stream opens by establishing light gray on black explicitly, since the
// terminal's own defaults need not match the image's.

use textmode_color::{Palette, Rgb};
use textmode_grid::{ColorRef, GlyphMap, Grid};

use super::{At, TermState, split_blink};
use crate::error::RenderError;
use crate::output::OutputBuffer;
use crate::sgr;

const DEFAULT_FG: Rgb = Rgb::new(170, 170, 170);

const DEFAULT: TermState<Rgb> = TermState::new(DEFAULT_FG, Rgb::BLACK);

fn resolve(palette: &Palette, color: ColorRef, at: At) -> Result<Rgb, RenderError> {
    match color {
        ColorRef::Index(raw) => palette
            .get(usize::from(raw))
            .ok_or_else(|| at.out_of_range(raw, palette.len()).into()),
        ColorRef::Direct(rgb) => Ok(rgb),
    }
}

pub fn encode<G: GlyphMap + ?Sized>(
    grid: &Grid,
    glyphs: &G,
    out: &mut OutputBuffer,
) -> Result<(), RenderError> {
    sgr::reset(out)?;
    sgr::fg_rgb(out, DEFAULT.fg)?;
    sgr::bg_rgb(out, DEFAULT.bg)?;

    let palette = grid.palette();
    let mut state = DEFAULT;

    for (y, row) in grid.iter_rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let at = At { row: y, column: x };
            let fg = resolve(palette, cell.attr.fg, at)?;
            let (bg, blink) = split_blink(cell.attr.bg, grid.blink());
            let bg = resolve(palette, bg, at)?;

            if fg != state.fg {
                sgr::fg_rgb(out, fg)?;
                state.fg = fg;
            }
            if bg != state.bg {
                sgr::bg_rgb(out, bg)?;
                state.bg = bg;
            }
            if blink != state.blink {
                sgr::blink(out, blink)?;
                state.blink = blink;
            }

            out.push_bytes(glyphs.glyph(cell.code));
        }

        if state.bg != Rgb::BLACK {
            sgr::bg_rgb(out, Rgb::BLACK)?;
            state.bg = Rgb::BLACK;
        }
        out.push_bytes(b"\n");
    }

    sgr::reset(out)?;
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
