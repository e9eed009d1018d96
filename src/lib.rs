// SPDX-License-Identifier: MIT
//
// textmode: render character-cell images as terminal output.
//
// A loader hands over a `Grid` (glyph codes, color attributes, the image's
// palette); `render` turns it into a byte stream for one of four terminal
// capability tiers:
//
//   text      → glyphs and line breaks only
//   ansi16    → VGA colors via SGR 30–47, bold/blink for the bright half
//   xterm256  → nearest xterm palette entry via SGR 38;5 / 48;5
//   truecolor → exact RGB via SGR 38;2 / 48;2
//
// The quantizing tiers pick colors by perceptual distance (CIE Lab). Every
// render is a single synchronous pass that keeps a running attribute state
// and emits only what changed. Output is buffered and handed to the sink
// in one write, so a failed render leaves the sink untouched.

pub mod encode;
pub mod error;
pub mod options;
pub mod output;
pub mod sgr;

use std::io::Write;

pub use error::RenderError;
pub use options::{ParseTierError, RenderOptions, Tier};
pub use output::OutputBuffer;
pub use textmode_color as color;
pub use textmode_grid as grid;
pub use textmode_grid::{
    Attribute, BlinkPolicy, Cell, ColorRef, Cp437, GlyphMap, Grid, GridError, PaletteType,
};

/// The tier a render of `grid` will actually use.
///
/// A grid whose palette type is [`PaletteType::None`] has no colors, so it
/// always renders as [`Tier::Text`] whatever was requested.
#[must_use]
pub const fn effective_tier(grid: &Grid, requested: Tier) -> Tier {
    if grid.palette_type().has_color() {
        requested
    } else {
        Tier::Text
    }
}

/// Render `grid` to `out` at the tier chosen by `options`.
///
/// Nothing reaches `out` unless the whole grid encodes successfully.
///
/// # Errors
///
/// - [`RenderError::Grid`] when an index-mode color lies past the end of
///   the grid's palette.
/// - [`RenderError::Match`] when nearest-color search has no candidates.
/// - [`RenderError::Io`] when writing to `out` fails.
pub fn render<W, G>(
    grid: &Grid,
    options: &RenderOptions,
    glyphs: &G,
    out: &mut W,
) -> Result<(), RenderError>
where
    W: Write + ?Sized,
    G: GlyphMap + ?Sized,
{
    let tier = effective_tier(grid, options.tier);
    if tier != options.tier {
        log::debug!(
            "palette type {:?} has no colors; rendering as {tier} instead of {}",
            grid.palette_type(),
            options.tier
        );
    }
    log::debug!(
        "rendering {}x{} grid as {tier} (palette type {:?}, {} palette entries)",
        grid.rows(),
        grid.columns(),
        grid.palette_type(),
        grid.palette().len()
    );

    let mut buf = OutputBuffer::for_cells(grid.cells().len());
    match tier {
        Tier::Text => encode::text::encode(grid, glyphs, &mut buf),
        Tier::Ansi16 => encode::ansi16::encode(grid, glyphs, &mut buf)?,
        Tier::Xterm256 => encode::xterm256::encode(grid, glyphs, &mut buf)?,
        Tier::Truecolor => encode::truecolor::encode(grid, glyphs, &mut buf)?,
    }

    log::trace!("rendered {} bytes", buf.len());
    buf.flush_to(out)?;
    Ok(())
}

/// Render `grid` into a fresh byte vector.
///
/// # Errors
///
/// Same as [`render`], minus sink failures.
pub fn render_to_vec<G: GlyphMap + ?Sized>(
    grid: &Grid,
    options: &RenderOptions,
    glyphs: &G,
) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    render(grid, options, glyphs, &mut out)?;
    Ok(out)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
