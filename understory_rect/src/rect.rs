// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Rect`] value type: construction, edges, queries, and set algebra.

use kurbo::{Point, Size};

/// Axis-aligned rectangle stored as origin and extent.
///
/// `x`/`y` is the top-left corner in a space where Y grows downward, and
/// `width`/`height` extend right and down from it.
///
/// ## Degenerate rectangles
///
/// Non-negative extents are not enforced. Edge setters, [`Rect::side_rect`] with
/// inverted edges, and [`Rect::intersect`] of disjoint inputs all produce zero- or
/// negative-area values, and these are ordinary values rather than errors.
/// Use [`Rect::is_empty`] to ask whether a rectangle covers any area.
///
/// ## Equality
///
/// Two rectangles are equal when all four fields compare equal with plain float
/// comparison. There is no tolerance.
///
/// ## Edges
///
/// Setting an edge keeps the opposite edge where it was:
///
/// - [`set_right`](Rect::set_right) and [`set_bottom`](Rect::set_bottom) only change the extent.
/// - [`set_left`](Rect::set_left) and [`set_top`](Rect::set_top) move the origin and adjust the
///   extent so the right (or bottom) edge stays fixed.
///
/// ```
/// use understory_rect::Rect;
///
/// let mut r = Rect::new(0.0, 0.0, 10.0, 10.0);
/// r.set_left(5.0);
/// assert_eq!(r, Rect::new(5.0, 0.0, 5.0, 10.0));
/// assert_eq!(r.right(), 10.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The rectangle with all fields zero. This is what [`Rect::intersect`] returns
    /// when the inputs do not overlap.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// A rectangle covering effectively the whole coordinate space.
    ///
    /// The origin sits at `-f64::MAX / 2` and the extents are `f64::MAX`, so the
    /// right and bottom edges land at `f64::MAX / 2`. Both edges stay finite when
    /// an offset is added, which makes this usable as a "no clip" region.
    pub const VERY_BIG: Self = Self::new(-f64::MAX / 2.0, -f64::MAX / 2.0, f64::MAX, f64::MAX);

    /// Create a rectangle from its origin and extents.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a top-left position and a size.
    pub const fn from_position_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Create a rectangle from its four edges.
    ///
    /// Edges are taken as given: if `right < left` or `bottom < top` the result has
    /// a negative extent.
    pub const fn side_rect(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create a rectangle from its top-left and bottom-right corners.
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::side_rect(top_left.x, bottom_right.x, top_left.y, bottom_right.y)
    }

    /// Create a square of side `side` centered on `center`.
    pub const fn square(center: Point, side: f64) -> Self {
        Self::square_xy(center.x, center.y, side)
    }

    /// Create a square of side `side` centered on `(center_x, center_y)`.
    pub const fn square_xy(center_x: f64, center_y: f64, side: f64) -> Self {
        Self::new(center_x - side * 0.5, center_y - side * 0.5, side, side)
    }

    /// Left edge. Same as `x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge. Same as `y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge, `x + width`.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge, `y + height`.
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the left edge, keeping the right edge in place.
    pub fn set_left(&mut self, left: f64) {
        self.width += self.x - left;
        self.x = left;
    }

    /// Move the top edge, keeping the bottom edge in place.
    pub fn set_top(&mut self, top: f64) {
        self.height += self.y - top;
        self.y = top;
    }

    /// Move the right edge. Only `width` changes.
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    /// Move the bottom edge. Only `height` changes.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }

    /// Top-left corner as a point.
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the rectangle so its top-left corner is at `position`. The size is kept.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Width and height as a size.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resize the rectangle, keeping its top-left corner.
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    /// Top-left corner.
    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Top-right corner.
    pub const fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    /// Bottom-right corner.
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Bottom-left corner.
    pub const fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    /// Center point.
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Product of the extents. Negative for inverted rectangles; not clamped.
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Return true if the rectangle has no area (either extent zero or negative).
    /// Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether `point` lies inside the rectangle. All four edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x <= self.right()
            && point.y <= self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle. Shared edges count as inside.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Whether the interiors of the two rectangles overlap.
    ///
    /// Unlike [`contains`](Rect::contains) this uses strict comparisons: rectangles
    /// that only touch along an edge or at a corner do not intersect.
    pub fn intersects_with(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// The overlapping region of two rectangles.
    ///
    /// Returns [`Rect::ZERO`] when there is no overlap on either axis, including
    /// when the inputs only touch.
    ///
    /// ```
    /// use understory_rect::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    /// assert_eq!(a.intersect(&b), Rect::new(5.0, 5.0, 5.0, 5.0));
    /// assert_eq!(a.intersect(&Rect::new(20.0, 0.0, 5.0, 5.0)), Rect::ZERO);
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let left = self.x.max(other.x);
        let right = self.right().min(other.right());
        if right <= left {
            return Self::ZERO;
        }

        let top = self.y.max(other.y);
        let bottom = self.bottom().min(other.bottom());
        if bottom <= top {
            return Self::ZERO;
        }

        Self::side_rect(left, right, top, bottom)
    }

    /// The smallest rectangle enclosing both inputs. Commutative.
    pub fn union(&self, other: &Self) -> Self {
        Self::side_rect(
            self.x.min(other.x),
            self.right().max(other.right()),
            self.y.min(other.y),
            self.bottom().max(other.bottom()),
        )
    }

    /// Grow the rectangle by `amount` on every side. Negative values shrink it.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// A full-height slice of width `width` anchored to the right edge.
    pub fn right_part(&self, width: f64) -> Self {
        Self::new(self.right() - width, self.y, width, self.height)
    }

    /// A full-height slice of width `width` anchored to the left edge.
    pub fn left_part(&self, width: f64) -> Self {
        Self::new(self.x, self.y, width, self.height)
    }
}
