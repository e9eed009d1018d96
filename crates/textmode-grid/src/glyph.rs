// SPDX-License-Identifier: MIT
//
// Glyph maps: code-page byte → printable terminal bytes.
//
// The renderer treats glyph output as opaque: one lookup per cell, bytes
// copied straight to the sink. `Cp437` is the IBM PC code page that almost
// all textmode art is drawn in, mapped to UTF-8. The C0 control range
// becomes the IBM graphic glyphs (☺ ☻ ♥ …) since art uses them as pictures,
// not as terminal controls.

/// A fixed, total, side-effect-free mapping from glyph code to bytes.
pub trait GlyphMap {
    fn glyph(&self, code: u8) -> &[u8];
}

impl<F> GlyphMap for F
where
    F: Fn(u8) -> &'static [u8],
{
    #[inline]
    fn glyph(&self, code: u8) -> &[u8] {
        self(code)
    }
}

/// Code page 437 to UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cp437;

impl GlyphMap for Cp437 {
    #[inline]
    fn glyph(&self, code: u8) -> &[u8] {
        match code {
            0x00..=0x1f => LOW[usize::from(code)].as_bytes(),
            0x20..=0x7e => {
                let idx = usize::from(code);
                &ASCII[idx..=idx]
            }
            0x7f..=0xff => HIGH[usize::from(code - 0x7f)].as_bytes(),
        }
    }
}

/// Identity table for the printable ASCII range.
#[allow(clippy::cast_possible_truncation)] // i < 128.
static ASCII: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// 0x00–0x1F. NUL is drawn as a blank cell.
const LOW: [&str; 32] = [
    " ", "☺", "☻", "♥", "♦", "♣", "♠", "•", "◘", "○", "◙", "♂", "♀", "♪", "♫", "☼", //
    "►", "◄", "↕", "‼", "¶", "§", "▬", "↨", "↑", "↓", "→", "←", "∟", "↔", "▲", "▼",
];

/// 0x7F–0xFF.
const HIGH: [&str; 129] = [
    "⌂", //
    "Ç", "ü", "é", "â", "ä", "à", "å", "ç", "ê", "ë", "è", "ï", "î", "ì", "Ä", "Å", //
    "É", "æ", "Æ", "ô", "ö", "ò", "û", "ù", "ÿ", "Ö", "Ü", "¢", "£", "¥", "₧", "ƒ", //
    "á", "í", "ó", "ú", "ñ", "Ñ", "ª", "º", "¿", "⌐", "¬", "½", "¼", "¡", "«", "»", //
    "░", "▒", "▓", "│", "┤", "╡", "╢", "╖", "╕", "╣", "║", "╗", "╝", "╜", "╛", "┐", //
    "└", "┴", "┬", "├", "─", "┼", "╞", "╟", "╚", "╔", "╩", "╦", "╠", "═", "╬", "╧", //
    "╨", "╤", "╥", "╙", "╘", "╒", "╓", "╫", "╪", "┘", "┌", "█", "▄", "▌", "▐", "▀", //
    "α", "ß", "Γ", "π", "Σ", "σ", "µ", "τ", "Φ", "Θ", "Ω", "δ", "∞", "φ", "ε", "∩", //
    "≡", "±", "≥", "≤", "⌠", "⌡", "÷", "≈", "°", "∙", "·", "√", "ⁿ", "²", "■", "\u{a0}",
];

// ─── Tests ───────────────────────────────────────────────────────────────────
