//! Coordinate scales: sequence space to rendering-surface space.
//!
//! Every track owns a linear [`Scale`]. Zoom and pan arrive as a
//! [`ZoomTransform`] from the surface's gesture handler; per-track scales are
//! always re-derived from the unzoomed base scale plus the current transform,
//! so repeated gestures never accumulate floating-point drift.

use serde::{Deserialize, Serialize};

use crate::types::SeqPos;

/// Linear, invertible mapping from a sequence domain onto a surface range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Base scale for a track of `length` bases drawn across `width` surface units.
    pub fn for_extent(length: SeqPos, origin: f64, width: f64) -> Self {
        Self::linear((0.0, length as f64), (origin, origin + width))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Sequence position to surface position.
    pub fn scale(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (x - d0) * (r1 - r0) / (d1 - d0)
    }

    /// Surface position to sequence position.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (y - r0) * (d1 - d0) / (r1 - r0)
    }

    pub fn position(&self, pos: SeqPos) -> f64 {
        self.scale(pos as f64)
    }

    /// Nearest integer sequence position under a surface coordinate.
    /// Positions left of the domain clamp to zero.
    pub fn nearest_position(&self, y: f64) -> SeqPos {
        let x = self.invert(y).round();
        if x <= 0.0 {
            0
        } else {
            x as SeqPos
        }
    }

    /// Snap a raw surface coordinate onto the nearest integer sequence position.
    pub fn snap(&self, y: f64) -> f64 {
        self.scale(self.invert(y).round())
    }

    /// Surface units covered by one base.
    pub fn units_per_base(&self) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            0.0
        } else {
            (r1 - r0) / (d1 - d0)
        }
    }

    /// Whether a surface coordinate lies within the drawable range.
    pub fn in_range(&self, y: f64) -> bool {
        let (lo, hi) = if self.range.0 <= self.range.1 {
            self.range
        } else {
            (self.range.1, self.range.0)
        };
        lo <= y && y <= hi
    }
}

/// Zoom/pan state reported by the surface: `p' = p * k + x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { k: 1.0, x: 0.0 };

    pub fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    pub fn apply(&self, p: f64) -> f64 {
        p * self.k + self.x
    }

    pub fn invert(&self, p: f64) -> f64 {
        (p - self.x) / self.k
    }

    /// Restrict the scale factor to `[min_k, max_k]`, keeping the translation.
    pub fn clamped(self, min_k: f64, max_k: f64) -> Self {
        let k = if self.k.is_finite() && self.k > 0.0 {
            self.k.clamp(min_k, max_k)
        } else {
            min_k
        };
        Self { k, x: if self.x.is_finite() { self.x } else { 0.0 } }
    }

    /// Derive the zoomed scale from an unzoomed base. The range is kept and
    /// the domain becomes whatever sequence interval is now visible in it.
    pub fn rescale(&self, base: &Scale) -> Scale {
        let (r0, r1) = base.range();
        let d0 = base.invert(self.invert(r0));
        let d1 = base.invert(self.invert(r1));
        Scale::linear((d0, d1), (r0, r1))
    }
}

/// One scale per track slot, rebuilt in full whenever the track set changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleSet {
    base: Vec<Scale>,
    current: Vec<Scale>,
}

impl ScaleSet {
    /// Build base scales for the given track lengths, all sharing one
    /// `[0, max length]` domain so surface offsets transfer between tracks.
    pub fn shared(lengths: &[SeqPos], origin: f64, width: f64) -> Self {
        let extent = lengths.iter().copied().max().unwrap_or(0).max(1);
        let base = vec![Scale::for_extent(extent, origin, width); lengths.len()];
        Self {
            current: base.clone(),
            base,
        }
    }

    pub fn from_scales(scales: Vec<Scale>) -> Self {
        Self {
            current: scales.clone(),
            base: scales,
        }
    }

    /// Re-derive every current scale from its base and `transform`.
    pub fn apply(&mut self, transform: &ZoomTransform) {
        self.current = self.base.iter().map(|b| transform.rescale(b)).collect();
    }

    /// Current scale of a 1-based track slot.
    pub fn get(&self, track: usize) -> Option<&Scale> {
        track.checked_sub(1).and_then(|i| self.current.get(i))
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
