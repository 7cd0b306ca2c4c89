// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant identifiers and the routing rule.

use crate::vector::Vector2;

/// One of the four children of a subdivided node.
///
/// The discriminant is the child's index within its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Index 0.
    TopLeft = 0,
    /// Index 1.
    TopRight = 1,
    /// Index 2.
    BottomLeft = 2,
    /// Index 3.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Child index in `0..4`.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quadrant for a child index, or `None` if `index >= 4`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomLeft),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Pick the quadrant that owns `position` in a node split at `midpoint`.
    ///
    /// Only the anchor point is tested. A coordinate equal to the midpoint
    /// goes right (for `x`) or bottom (for `y`).
    ///
    /// ```
    /// use understory_quadtree::{Quadrant, Vector2};
    ///
    /// let mid = Vector2::new(50.0, 50.0);
    /// assert_eq!(Quadrant::route(Vector2::new(10.0, 10.0), mid), Quadrant::TopLeft);
    /// assert_eq!(Quadrant::route(Vector2::new(50.0, 10.0), mid), Quadrant::TopRight);
    /// assert_eq!(Quadrant::route(Vector2::new(10.0, 50.0), mid), Quadrant::BottomLeft);
    /// assert_eq!(Quadrant::route(mid, mid), Quadrant::BottomRight);
    /// ```
    #[inline]
    pub fn route(position: Vector2, midpoint: Vector2) -> Self {
        let top = position.y < midpoint.y;
        let left = position.x < midpoint.x;
        match (top, left) {
            (true, true) => Self::TopLeft,
            (true, false) => Self::TopRight,
            (false, true) => Self::BottomLeft,
            (false, false) => Self::BottomRight,
        }
    }

    /// Whether this quadrant is on the top half.
    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Whether this quadrant is on the left half.
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::Quadrant;
    use crate::vector::Vector2;

    #[test]
    fn index_matches_bit_layout() {
        // index = (top ? 0 : 2) + (left ? 0 : 1)
        for q in Quadrant::ALL {
            let expected = (if q.is_top() { 0 } else { 2 }) + (if q.is_left() { 0 } else { 1 });
            assert_eq!(q.index(), expected);
            assert_eq!(Quadrant::from_index(q.index()), Some(q));
        }
        assert_eq!(Quadrant::from_index(4), None);
    }

    #[test]
    fn boundary_routes_right_and_bottom() {
        let mid = Vector2::new(5.0, 5.0);
        assert_eq!(Quadrant::route(Vector2::new(5.0, 4.999), mid), Quadrant::TopRight);
        assert_eq!(Quadrant::route(Vector2::new(4.999, 5.0), mid), Quadrant::BottomLeft);
        assert_eq!(Quadrant::route(Vector2::new(5.0, 5.0), mid), Quadrant::BottomRight);
        assert_eq!(Quadrant::route(Vector2::new(-100.0, -100.0), mid), Quadrant::TopLeft);
    }
}
