//! 2-component Q16.16 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed32::Fixed32;
use crate::fixed64::Fixed64;
use crate::raw::math64;

/// Deterministic 2D vector over [`Fixed32`].
///
/// Componentwise arithmetic wraps like the scalar. Length is accumulated in
/// the 64-bit kernel so that squaring components cannot silently wrap.
///
/// # Example
/// ```
/// use fixmath_core_rs::{Fixed32, Vec2};
///
/// let v = Vec2::new(Fixed32::from_int(3), Fixed32::from_int(4));
/// assert_eq!(v.length(), Fixed32::from_int(5));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec2 {
    pub x: Fixed32,
    pub y: Fixed32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::splat(Fixed32::ZERO);
    pub const ONE: Vec2 = Vec2::splat(Fixed32::ONE);
    pub const X: Vec2 = Vec2::new(Fixed32::ONE, Fixed32::ZERO);
    pub const Y: Vec2 = Vec2::new(Fixed32::ZERO, Fixed32::ONE);

    #[inline]
    pub const fn new(x: Fixed32, y: Fixed32) -> Self {
        Vec2 { x, y }
    }

    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: Fixed32) -> Self {
        Vec2 { x: v, y: v }
    }

    /// Dot product in the narrow format (wraps like scalar `mul`).
    #[inline]
    pub fn dot(self, other: Self) -> Fixed32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (signed parallelogram area).
    #[inline]
    pub fn cross(self, other: Self) -> Fixed32 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, accumulated in Q32.32 so components up to the full
    /// narrow range square without wrapping.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.to_fixed64();
        let y = self.y.to_fixed64();
        x * x + y * y
    }

    /// Euclidean length (precise tier).
    #[inline]
    pub fn length(self) -> Fixed32 {
        Fixed64::from_raw(math64::sqrt(self.length_sqr().raw())).to_fixed32()
    }

    #[inline]
    pub fn length_fast(self) -> Fixed32 {
        Fixed64::from_raw(math64::sqrt_fast(self.length_sqr().raw())).to_fixed32()
    }

    #[inline]
    pub fn length_fastest(self) -> Fixed32 {
        Fixed64::from_raw(math64::sqrt_fastest(self.length_sqr().raw())).to_fixed32()
    }

    /// Unit vector (precise tier). Zero length is a domain error: panics
    /// with `safety-checks`, yields the zero vector otherwise.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Vec2::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn normalize_fast(self) -> Self {
        let len = self.length_fast();
        Vec2::new(self.x.div_fast(len), self.y.div_fast(len))
    }

    #[inline]
    pub fn normalize_fastest(self) -> Self {
        let len = self.length_fastest();
        Vec2::new(self.x.div_fastest(len), self.y.div_fastest(len))
    }

    #[inline]
    pub fn distance(self, other: Self) -> Fixed32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> Fixed64 {
        (other - self).length_sqr()
    }

    /// Componentwise interpolation, one rounding per component.
    #[inline]
    pub fn lerp(self, other: Self, t: Fixed32) -> Self {
        Vec2::new(self.x.lerp(other.x, t), self.y.lerp(other.y, t))
    }

    /// Rescale to at most `max` length; shorter vectors pass through
    /// unchanged (bit-exact). Each component is rescaled by one widened
    /// `c * max / len` divide, so the truncation stays within one ULP
    /// instead of scaling with the vector magnitude.
    pub fn clamp_length(self, max: Fixed32) -> Self {
        let len = self.length();
        if len <= max || len == Fixed32::ZERO {
            return self;
        }
        let scale = |c: Fixed32| {
            Fixed32::from_raw(((c.raw() as i64 * max.raw() as i64) / len.raw() as i64) as i32)
        };
        Vec2::new(scale(self.x), scale(self.y))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Vec2::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<Fixed32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed32) -> Self {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<Fixed32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed32) -> Self {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Rem for Vec2 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Vec2::new(self.x % rhs.x, self.y % rhs.y)
    }
}

impl Rem<Fixed32> for Vec2 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed32) -> Self {
        Vec2::new(self.x % rhs, self.y % rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Fixed32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed32) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_length() {
        let v = Vec2::new(Fixed32::from_int(3), Fixed32::from_int(4));
        assert_eq!(v.length(), Fixed32::from_int(5));
        assert_eq!(v.length_sqr(), Fixed64::from_int(25));
    }

    #[test]
    fn test_dot_cross() {
        let a = Vec2::new(Fixed32::from_int(2), Fixed32::from_int(1));
        let b = Vec2::new(Fixed32::from_int(-1), Fixed32::from_int(3));
        assert_eq!(a.dot(b), Fixed32::from_int(1));
        assert_eq!(a.cross(b), Fixed32::from_int(7));
    }

    #[test]
    fn test_large_components_do_not_wrap_length_sqr() {
        // 300^2 + 300^2 = 180000, far beyond the Q16.16 integer range.
        let v = Vec2::splat(Fixed32::from_int(300));
        assert_eq!(v.length_sqr(), Fixed64::from_int(180_000));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec2::new(Fixed32::from_int(1), Fixed32::from_int(2));
        let b = Vec2::new(Fixed32::from_int(5), Fixed32::from_int(-2));
        assert_eq!(a.lerp(b, Fixed32::ZERO), a);
        assert_eq!(a.lerp(b, Fixed32::ONE), b);
    }
}
