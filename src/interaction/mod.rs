//! Pointer hit testing.
//!
//! The registry holds the clickable bounds of every marker painted in the
//! current frame. It is frame-scoped: the widget clears and refills it when a
//! built frame is committed, so a repaint can never leave stale regions
//! behind.

use smallvec::SmallVec;

use crate::core::Rect;

/// Clickable bounds of one rendered marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub index: usize,
    pub bounds: Rect,
}

impl HitRegion {
    #[must_use]
    pub const fn new(index: usize, bounds: Rect) -> Self {
        Self { index, bounds }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitTestRegistry {
    regions: SmallVec<[HitRegion; 8]>,
}

impl HitTestRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, index: usize, bounds: Rect) {
        self.regions.push(HitRegion::new(index, bounds));
    }

    /// Resolves a pointer-down position to a data index.
    ///
    /// Returns the first region in insertion order (lowest row index) whose
    /// bounds contain the point, or `None` when the tap misses every marker.
    #[must_use]
    pub fn resolve(&self, x: f64, y: f64) -> Option<usize> {
        self.regions
            .iter()
            .find(|region| region.bounds.contains(x, y))
            .map(|region| region.index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }
}
