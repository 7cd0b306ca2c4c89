// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability the tree requires from stored items.

use kurbo::{Point, Rect};

use crate::region::Region;
use crate::vector::Vector2;

/// Anything with an axis-aligned bounding box anchored at a position.
///
/// The tree only reads these two accessors; it never owns the underlying
/// object beyond the value handed to [`QuadTree::insert`][crate::QuadTree::insert].
/// Implement it for a reference or small handle type when the object itself
/// should stay with the caller.
pub trait BoundedItem {
    /// Anchor point (top-left corner of the bounding box).
    fn position(&self) -> Vector2;

    /// Extent of the bounding box from the anchor.
    fn size(&self) -> Vector2;

    /// The bounding box as a [`Region`].
    ///
    /// The default implementation combines [`position`][BoundedItem::position]
    /// and [`size`][BoundedItem::size].
    #[inline]
    fn bounds(&self) -> Region {
        Region::new(self.position(), self.size())
    }
}

impl<T: BoundedItem + ?Sized> BoundedItem for &T {
    #[inline]
    fn position(&self) -> Vector2 {
        (**self).position()
    }

    #[inline]
    fn size(&self) -> Vector2 {
        (**self).size()
    }
}

impl BoundedItem for Region {
    #[inline]
    fn position(&self) -> Vector2 {
        self.origin
    }

    #[inline]
    fn size(&self) -> Vector2 {
        self.size
    }

    #[inline]
    fn bounds(&self) -> Region {
        *self
    }
}

/// A bare point with zero extent.
impl BoundedItem for Vector2 {
    #[inline]
    fn position(&self) -> Vector2 {
        *self
    }

    #[inline]
    fn size(&self) -> Vector2 {
        Vector2::ZERO
    }
}

impl BoundedItem for Point {
    #[inline]
    fn position(&self) -> Vector2 {
        Vector2::from(*self)
    }

    #[inline]
    fn size(&self) -> Vector2 {
        Vector2::ZERO
    }
}

/// Uses the normalized rectangle, so the anchor is always the minimum corner.
///
/// `Rect` has its own inherent `size` returning [`kurbo::Size`]; method syntax
/// picks that one, so call `BoundedItem::size(&rect)` to get a [`Vector2`].
impl BoundedItem for Rect {
    #[inline]
    fn position(&self) -> Vector2 {
        Vector2::new(self.min_x(), self.min_y())
    }

    #[inline]
    fn size(&self) -> Vector2 {
        let r = self.abs();
        Vector2::new(r.width(), r.height())
    }
}

#[cfg(test)]
mod tests {
    use super::BoundedItem;
    use crate::region::Region;
    use crate::vector::Vector2;

    struct Ball {
        pos: Vector2,
        dim: Vector2,
    }

    impl BoundedItem for Ball {
        fn position(&self) -> Vector2 {
            self.pos
        }

        fn size(&self) -> Vector2 {
            self.dim
        }
    }

    #[test]
    fn default_bounds_from_accessors() {
        let ball = Ball {
            pos: Vector2::new(3.0, 4.0),
            dim: Vector2::new(5.0, 5.0),
        };
        assert_eq!(ball.bounds(), Region::from_xywh(3.0, 4.0, 5.0, 5.0));
        // Through a reference as well.
        let r = &ball;
        assert_eq!(r.bounds(), ball.bounds());
    }

    #[test]
    fn points_have_no_extent() {
        let p = Vector2::new(1.0, 2.0);
        assert_eq!(p.bounds(), Region::new(p, Vector2::ZERO));
        let kp = kurbo::Point::new(1.0, 2.0);
        assert_eq!(kp.bounds(), p.bounds());
    }

    #[test]
    fn kurbo_rect_anchors_at_min_corner() {
        let r = kurbo::Rect::new(10.0, 8.0, 2.0, 4.0);
        assert_eq!(BoundedItem::position(&r), Vector2::new(2.0, 4.0));
        assert_eq!(BoundedItem::size(&r), Vector2::new(8.0, 4.0));
        assert_eq!(BoundedItem::bounds(&r), Region::from_xywh(2.0, 4.0, 8.0, 4.0));
    }
}
