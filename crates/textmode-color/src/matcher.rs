// SPDX-License-Identifier: MIT
//
// Nearest-color matching in Lab space.
//
// Matching is a linear scan: the target palettes have at most 256 entries,
// and index-mode cells never reach this code per cell anyway. They go through
// a `LookupTable` that pays the matching cost once per distinct source index.
//
// Tie-break rule: the scan keeps the first candidate it sees and replaces the
// running best only on a strictly smaller distance. Equidistant candidates
// therefore always resolve to the lowest index.

use crate::error::MatchError;
use crate::lab::{Lab, to_lab};
use crate::rgb::Rgb;

/// Index of the candidate nearest to `color` by Euclidean Lab distance.
///
/// # Errors
///
/// Returns [`MatchError::EmptyPalette`] if `candidates` is empty.
///
/// ```
/// use textmode_color::{Lab, nearest_match};
///
/// let candidates = [Lab::new(0.0, 0.0, 0.0), Lab::new(50.0, 0.0, 0.0)];
/// assert_eq!(nearest_match(Lab::new(40.0, 0.0, 0.0), &candidates), Ok(1));
/// ```
pub fn nearest_match(color: Lab, candidates: &[Lab]) -> Result<usize, MatchError> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.iter().enumerate() {
        let dist = color.distance(*candidate);
        match best {
            Some((_, lowest)) if dist >= lowest => {}
            _ => best = Some((idx, dist)),
        }
    }

    best.map(|(idx, _)| idx).ok_or(MatchError::EmptyPalette)
}

// ─── LabPalette ──────────────────────────────────────────────────────────────

/// A palette converted to Lab, order preserved.
///
/// Built once per render for the target tier and for the source palette of
/// a lookup table; dropped with the render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabPalette {
    colors: Vec<Lab>,
}

impl LabPalette {
    #[must_use]
    pub fn new(palette: &[Rgb]) -> Self {
        Self {
            colors: palette.iter().copied().map(to_lab).collect(),
        }
    }

    /// Nearest entry to a Lab color.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if this palette has no entries.
    #[inline]
    pub fn nearest(&self, color: Lab) -> Result<usize, MatchError> {
        nearest_match(color, &self.colors)
    }

    /// Nearest entry to an sRGB color (converted on the fly).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if this palette has no entries.
    #[inline]
    pub fn nearest_rgb(&self, color: Rgb) -> Result<usize, MatchError> {
        self.nearest(to_lab(color))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Lab] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ─── LookupTable ─────────────────────────────────────────────────────────────

/// Precomputed source-index → target-index mapping.
///
/// Entry `i` holds the index of the target color nearest to source entry `i`.
/// The table has exactly one entry per source color and is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupTable {
    entries: Vec<usize>,
}

impl LookupTable {
    /// Match every source color against an already-converted target palette.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if `source` is non-empty and
    /// `target` is empty.
    pub fn build(source: &[Rgb], target: &LabPalette) -> Result<Self, MatchError> {
        let entries = LabPalette::new(source)
            .as_slice()
            .iter()
            .map(|&lab| target.nearest(lab))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Convenience form of [`LookupTable::build`] taking two sRGB palettes.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if `source` is non-empty and
    /// `target` is empty.
    pub fn between(source: &[Rgb], target: &[Rgb]) -> Result<Self, MatchError> {
        Self::build(source, &LabPalette::new(target))
    }

    /// Target index for a source index, or `None` past the end of the table.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
