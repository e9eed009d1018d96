// SPDX-License-Identifier: MIT
//
// SGR (Select Graphic Rendition) escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit; that belongs to the tier encoders. This
// module only knows the byte-level encoding of the sequences textmode needs.

use std::io::{self, Write};

use textmode_color::Rgb;

// ─── Codes ───────────────────────────────────────────────────────────────────

/// SGR 1: increased intensity. Selects the bright foreground half (8–15).
pub const BOLD: u8 = 1;
/// SGR 5: blink. On 16-color terminals also the bright background half.
pub const BLINK: u8 = 5;
/// SGR 22: normal intensity.
pub const NORMAL_INTENSITY: u8 = 22;
/// SGR 25: blink off.
pub const BLINK_OFF: u8 = 25;
/// SGR 30–37 base.
pub const FG_BASE: u8 = 30;
/// SGR 40–47 base.
pub const BG_BASE: u8 = 40;

// ─── Reset ───────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut (impl Write + ?Sized)) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Combined Codes ──────────────────────────────────────────────────────────

/// Emit several SGR codes as a single CSI sequence: `\x1b[1;31;44m`.
///
/// Does nothing if `codes` is empty.
pub fn codes(w: &mut (impl Write + ?Sized), codes: &[u8]) -> io::Result<()> {
    if codes.is_empty() {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        write!(w, "{code}")?;
    }
    w.write_all(b"m")
}

// ─── Blink ───────────────────────────────────────────────────────────────────

/// Toggle blink on (SGR 5) or off (SGR 25).
#[inline]
pub fn blink(w: &mut (impl Write + ?Sized), on: bool) -> io::Result<()> {
    let seq: &[u8] = if on { b"\x1b[5m" } else { b"\x1b[25m" };
    w.write_all(seq)
}

// ─── 256-Color ───────────────────────────────────────────────────────────────

/// Foreground from the 256-color palette: `\x1b[38;5;Nm`.
#[inline]
pub fn fg_indexed(w: &mut (impl Write + ?Sized), idx: u8) -> io::Result<()> {
    write!(w, "\x1b[38;5;{idx}m")
}

/// Background from the 256-color palette: `\x1b[48;5;Nm`.
#[inline]
pub fn bg_indexed(w: &mut (impl Write + ?Sized), idx: u8) -> io::Result<()> {
    write!(w, "\x1b[48;5;{idx}m")
}

// ─── TrueColor ───────────────────────────────────────────────────────────────

/// 24-bit foreground: `\x1b[38;2;R;G;Bm`.
#[inline]
pub fn fg_rgb(w: &mut (impl Write + ?Sized), color: Rgb) -> io::Result<()> {
    let Rgb { red, green, blue } = color;
    write!(w, "\x1b[38;2;{red};{green};{blue}m")
}

/// 24-bit background: `\x1b[48;2;R;G;Bm`.
#[inline]
pub fn bg_rgb(w: &mut (impl Write + ?Sized), color: Rgb) -> io::Result<()> {
    let Rgb { red, green, blue } = color;
    write!(w, "\x1b[48;2;{red};{green};{blue}m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
