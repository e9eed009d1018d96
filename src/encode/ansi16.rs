// SPDX-License-Identifier: MIT
//
// 16-color tier.
//
// Colors quantize into the VGA palette. The terminal only has eight color
// codes per channel, so the bright half (8–15) is reached through an
// attribute: bold (SGR 1) for the foreground, and, by long-standing
// convention of DOS-era terminals, blink (SGR 5) for the background. Moving
// between halves emits the attribute on/off code before the color code.
//
// Every code produced by one cell change is merged into a single sequence.

use textmode_color::ANSI16;
use textmode_grid::{GlyphMap, Grid};

use super::{At, Quantizer, TermState};
use crate::error::RenderError;
use crate::output::OutputBuffer;
use crate::sgr;

/// Light gray on black.
const DEFAULT: TermState<u8> = TermState::new(7, 0);

const BLACK: u8 = 0;

#[inline]
const fn is_bright(idx: u8) -> bool {
    idx >= 8
}

/// Push the codes that move one channel from `from` to `to`.
fn push_channel(codes: &mut Vec<u8>, from: u8, to: u8, base: u8, on: u8, off: u8) {
    if is_bright(to) && !is_bright(from) {
        codes.push(on);
    } else if !is_bright(to) && is_bright(from) {
        codes.push(off);
    }
    codes.push(base + to % 8);
}

pub fn encode<G: GlyphMap + ?Sized>(
    grid: &Grid,
    glyphs: &G,
    out: &mut OutputBuffer,
) -> Result<(), RenderError> {
    sgr::reset(out)?;

    let quantizer = Quantizer::new(grid, &ANSI16)?;
    let mut state = DEFAULT;
    let mut codes = Vec::with_capacity(4);

    for (y, row) in grid.iter_rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let at = At { row: y, column: x };
            let fg = quantizer.resolve(cell.attr.fg, at)?;
            let bg = quantizer.resolve(cell.attr.bg, at)?;

            codes.clear();
            if fg != state.fg {
                push_channel(&mut codes, state.fg, fg, sgr::FG_BASE, sgr::BOLD, sgr::NORMAL_INTENSITY);
                state.fg = fg;
            }
            if bg != state.bg {
                push_channel(&mut codes, state.bg, bg, sgr::BG_BASE, sgr::BLINK, sgr::BLINK_OFF);
                state.bg = bg;
            }
            sgr::codes(out, &codes)?;

            out.push_bytes(glyphs.glyph(cell.code));
        }

        // Keep the background from bleeding into the line-wrap padding.
        if state.bg != BLACK {
            codes.clear();
            push_channel(&mut codes, state.bg, BLACK, sgr::BG_BASE, sgr::BLINK, sgr::BLINK_OFF);
            sgr::codes(out, &codes)?;
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use textmode_color::{Palette, Rgb};
    use textmode_grid::{Attribute, Cell, PaletteType};

    use super::*;

    fn render(rows: usize, columns: usize, cells: Vec<Cell>) -> String {
        let grid = Grid::new(rows, columns, cells, Palette::ansi16()).unwrap();
        render_grid(&grid)
    }

    fn render_grid(grid: &Grid) -> String {
        let ascii = |c: u8| -> &'static [u8] {
            match c {
                b'A' => b"A",
                b'B' => b"B",
                _ => b".",
            }
        };
        let mut out = OutputBuffer::new();
        encode(grid, &ascii, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn cell(fg: u8, bg: u8) -> Cell {
        Cell::new(b'A', Attribute::indexed(fg, bg))
    }

    // ── Basics ──────────────────────────────────────────────────────────

    #[test]
    fn red_on_black_single_cell() {
        assert_eq!(render(1, 1, vec![cell(1, 0)]), "\x1b[0m\x1b[31mA\n\x1b[0m");
    }

    #[test]
    fn default_cell_needs_no_codes() {
        assert_eq!(render(1, 1, vec![cell(7, 0)]), "\x1b[0mA\n");
    }

    #[test]
    fn identical_run_emits_codes_once() {
        let out = render(1, 3, vec![cell(2, 0); 3]);
        assert_eq!(out, "\x1b[0m\x1b[32mAAA\n\x1b[0m");
    }

    // ── Bright halves ───────────────────────────────────────────────────

    #[test]
    fn bright_foreground_sets_and_clears_bold() {
        let out = render(1, 2, vec![cell(12, 0), cell(4, 0)]);
        assert_eq!(out, "\x1b[0m\x1b[1;34mA\x1b[22;34mA\n\x1b[0m");
    }

    #[test]
    fn bright_to_bright_skips_bold() {
        let out = render(1, 2, vec![cell(9, 0), cell(10, 0)]);
        assert_eq!(out, "\x1b[0m\x1b[1;31mA\x1b[32mA\n\x1b[0m");
    }

    #[test]
    fn bright_background_uses_blink_codes() {
        let out = render(1, 2, vec![cell(7, 14), cell(7, 6)]);
        assert_eq!(out, "\x1b[0m\x1b[5;46mA\x1b[25;46mA\x1b[40m\n");
    }

    #[test]
    fn both_channels_merge_into_one_sequence() {
        let out = render(1, 1, vec![cell(15, 9)]);
        assert_eq!(out, "\x1b[0m\x1b[1;37;5;41mA\x1b[25;40m\n\x1b[0m");
    }

    // ── Row ends ────────────────────────────────────────────────────────

    #[test]
    fn background_resets_at_row_end_but_foreground_persists() {
        let out = render(2, 1, vec![cell(3, 4), cell(3, 4)]);
        assert_eq!(
            out,
            "\x1b[0m\x1b[33;44mA\x1b[40m\n\x1b[44mA\x1b[40m\n\x1b[0m"
        );
    }

    #[test]
    fn black_background_row_end_is_silent() {
        let out = render(2, 1, vec![cell(7, 0), cell(7, 0)]);
        assert_eq!(out, "\x1b[0mA\nA\n");
    }

    // ── Direct colors ───────────────────────────────────────────────────

    #[test]
    fn direct_colors_quantize_to_nearest() {
        let cells = vec![Cell::new(
            b'B',
            Attribute::direct(Rgb::new(0xfe, 0x56, 0x56), Rgb::new(0x01, 0x00, 0xa9)),
        )];
        let grid = Grid::new(1, 1, cells, Palette::default())
            .unwrap()
            .with_palette_type(PaletteType::Truecolor);
        assert_eq!(render_grid(&grid), "\x1b[0m\x1b[1;31;44mB\x1b[40m\n\x1b[0m");
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn out_of_range_index_fails() {
        let grid = Grid::new(1, 1, vec![cell(7, 0)], Palette::new(vec![Rgb::BLACK; 4])).unwrap();
        let mut out = OutputBuffer::new();
        let err = encode(&grid, &|_: u8| -> &'static [u8] { b"." }, &mut out).unwrap_err();
        assert!(matches!(err, RenderError::Grid(_)));
    }
}
