// SPDX-License-Identifier: MIT
//
// sRGB → CIE L*a*b* conversion.
//
// Pipeline:
//
//   sRGB (u8) → sRGB (0.0–1.0) → linear sRGB → XYZ (D65) → L*a*b*
//
// The constants below are fixed: matching results (and therefore the escape
// codes the encoder emits) must be bit-for-bit reproducible, so nothing here
// may be swapped for a "more precise" variant without updating every
// expected output.

use crate::rgb::Rgb;

/// D65 reference white.
const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

/// Lab transfer function breakpoint (≈ (6/29)³) and linear-segment slope.
const EPSILON: f64 = 0.008_856;
const SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// A color in CIE L*a*b* space.
///
/// `l` runs from 0 (black) to 100 (white); `a` and `b` are the green–red and
/// blue–yellow opponent axes. Only used to compare colors; never displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance (CIE76 ΔE).
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        to_lab(rgb)
    }
}

/// Convert an 8-bit sRGB color to CIE L*a*b* under the D65 illuminant.
///
/// Pure and total: every 8-bit triple is a valid sRGB color.
///
/// ```
/// use textmode_color::{Rgb, to_lab};
///
/// let black = to_lab(Rgb::BLACK);
/// assert!(black.l.abs() < 1e-9);
/// ```
#[must_use]
pub fn to_lab(rgb: Rgb) -> Lab {
    let (r, g, b) = rgb.to_unit();
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    let x = 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g));
    let y = 0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g));
    let z = 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g));

    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y / WHITE_Y);
    let fz = lab_f(z / WHITE_Z);

    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Undo the sRGB transfer curve.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        SLOPE.mul_add(t, OFFSET)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
