//! 2D integer coordinates.

use core::ops::{Add, Mul, Neg, Sub};

/// An immutable 2D integer coordinate.
///
/// Arithmetic is component-wise. `x` grows rightward, `y` grows downward,
/// matching the row-major pixel layout of [`Surface`](crate::Surface).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    /// Create a coordinate from its components.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Both components set to the same value.
    ///
    /// Shapes use this for symmetric insets and offsets.
    #[inline]
    pub const fn splat(v: i64) -> Self {
        Self { x: v, y: v }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, value: i64) -> Vec2 {
        Vec2::new(self.x * value, self.y * value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wise_arithmetic() {
        let a = Vec2::new(3, -4);
        let b = Vec2::new(-1, 2);
        assert_eq!(a + b, Vec2::new(2, -2));
        assert_eq!(a - b, Vec2::new(4, -6));
        assert_eq!(-a, Vec2::new(-3, 4));
        assert_eq!(a * 3, Vec2::new(9, -12));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Vec2::default(), Vec2::new(0, 0));
    }

    #[test]
    fn splat_sets_both_components() {
        assert_eq!(Vec2::splat(7), Vec2::new(7, 7));
        assert_eq!(Vec2::new(10, 10) - Vec2::splat(3), Vec2::new(7, 7));
    }
}
