// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned regions and their quadrant split.

use kurbo::Rect;

use crate::quadrant::Quadrant;
use crate::vector::Vector2;

/// Axis-aligned rectangle described by an origin and a size.
///
/// The region covers the half-open area `[origin, origin + size)`. Sizes are
/// expected to be finite and non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Region {
    /// Top-left corner.
    pub origin: Vector2,
    /// Width and height.
    pub size: Vector2,
}

impl Region {
    /// Create a region from its origin and size.
    #[inline(always)]
    pub const fn new(origin: Vector2, size: Vector2) -> Self {
        Self { origin, size }
    }

    /// Create a region from origin coordinates and a width/height.
    #[inline]
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(w, h))
    }

    /// Top-left corner (same as `origin`).
    #[inline]
    pub fn min(&self) -> Vector2 {
        self.origin
    }

    /// Bottom-right corner, exclusive.
    #[inline]
    pub fn max(&self) -> Vector2 {
        self.origin + self.size
    }

    /// Point where the region splits into quadrants: `origin + size / 2`.
    #[inline]
    pub fn midpoint(&self) -> Vector2 {
        self.origin + self.size * 0.5
    }

    /// Whether the point lies inside the half-open region.
    #[inline]
    pub fn contains_point(&self, p: Vector2) -> bool {
        let max = self.max();
        self.origin.x <= p.x && p.x < max.x && self.origin.y <= p.y && p.y < max.y
    }

    /// Whether two half-open regions share any area.
    ///
    /// Regions that only touch along an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a, b) = (self.max(), other.max());
        self.origin.x < b.x && other.origin.x < a.x && self.origin.y < b.y && other.origin.y < a.y
    }

    /// Area of the region, clamped at zero.
    #[inline]
    pub fn area(&self) -> f64 {
        f64::max(self.size.x, 0.0) * f64::max(self.size.y, 0.0)
    }

    /// The child region covering one quadrant.
    ///
    /// Quadrants are split at the [`midpoint`](Self::midpoint) and each has
    /// half the parent's size.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let half = self.size * 0.5;
        let mid = self.midpoint();
        let origin = match quadrant {
            Quadrant::TopLeft => self.origin,
            Quadrant::TopRight => Vector2::new(mid.x, self.origin.y),
            Quadrant::BottomLeft => Vector2::new(self.origin.x, mid.y),
            Quadrant::BottomRight => mid,
        };
        Self::new(origin, half)
    }

    /// All four child regions, in quadrant index order.
    pub fn split(&self) -> [Self; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }
}

impl From<Rect> for Region {
    /// Normalizes the rectangle first so the size is never negative.
    #[inline]
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::from_xywh(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<Region> for Rect {
    #[inline]
    fn from(region: Region) -> Self {
        Self::from_origin_size(
            kurbo::Point::from(region.origin),
            kurbo::Size::new(region.size.x, region.size.y),
        )
    }
}
