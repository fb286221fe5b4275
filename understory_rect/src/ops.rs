// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Operator, hashing, formatting, and Kurbo conversion impls for [`Rect`].

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use kurbo::Vec2;

use crate::Rect;

/// Translate by `offset`. The size is unchanged.
impl Add<Vec2> for Rect {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// Translate by `-offset`. The size is unchanged.
impl Sub<Vec2> for Rect {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Vec2) -> Self {
        Self::new(self.x - offset.x, self.y - offset.y, self.width, self.height)
    }
}

impl AddAssign<Vec2> for Rect {
    #[inline]
    fn add_assign(&mut self, offset: Vec2) {
        *self = *self + offset;
    }
}

impl SubAssign<Vec2> for Rect {
    #[inline]
    fn sub_assign(&mut self, offset: Vec2) {
        *self = *self - offset;
    }
}

/// Scale position and size componentwise.
impl Mul<f64> for Rect {
    type Output = Self;

    #[inline]
    fn mul(self, multiplier: f64) -> Self {
        Self::new(
            self.x * multiplier,
            self.y * multiplier,
            self.width * multiplier,
            self.height * multiplier,
        )
    }
}

// `0.0 == -0.0`, so both must feed the hasher the same bits.
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.width).hash(state);
        canonical_bits(self.height).hash(state);
    }
}

/// Renders the horizontal and vertical spans as `(x-right)-(y-bottom)`.
///
/// Meant for diagnostics; it is not a serialization format.
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{})-({}-{})", self.x, self.right(), self.y, self.bottom())
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::side_rect(r.x0, r.x1, r.y0, r.y1)
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.left(), r.top(), r.right(), r.bottom())
    }
}
