//! 4-component Q32.32 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed64::Fixed64;

/// Deterministic 4D vector over [`Fixed64`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec4 {
    pub x: Fixed64,
    pub y: Fixed64,
    pub z: Fixed64,
    pub w: Fixed64,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::splat(Fixed64::ZERO);
    pub const ONE: Vec4 = Vec4::splat(Fixed64::ONE);
    pub const X: Vec4 = Vec4::new(Fixed64::ONE, Fixed64::ZERO, Fixed64::ZERO, Fixed64::ZERO);
    pub const Y: Vec4 = Vec4::new(Fixed64::ZERO, Fixed64::ONE, Fixed64::ZERO, Fixed64::ZERO);
    pub const Z: Vec4 = Vec4::new(Fixed64::ZERO, Fixed64::ZERO, Fixed64::ONE, Fixed64::ZERO);
    pub const W: Vec4 = Vec4::new(Fixed64::ZERO, Fixed64::ZERO, Fixed64::ZERO, Fixed64::ONE);

    #[inline]
    pub const fn new(x: Fixed64, y: Fixed64, z: Fixed64, w: Fixed64) -> Self {
        Vec4 { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: Fixed64) -> Self {
        Vec4 { x: v, y: v, z: v, w: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length, accumulated in 128-bit before narrowing back.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.raw() as i128;
        let y = self.y.raw() as i128;
        let z = self.z.raw() as i128;
        let w = self.w.raw() as i128;
        Fixed64::from_raw((((x * x) + (y * y) + (z * z) + (w * w)) >> 32) as i64)
    }

    #[inline]
    pub fn length(self) -> Fixed64 {
        self.length_sqr().sqrt()
    }

    #[inline]
    pub fn length_fast(self) -> Fixed64 {
        self.length_sqr().sqrt_fast()
    }

    #[inline]
    pub fn length_fastest(self) -> Fixed64 {
        self.length_sqr().sqrt_fastest()
    }

    /// Unit vector (precise tier). Zero length is a domain error.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Vec4::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    #[inline]
    pub fn normalize_fast(self) -> Self {
        let len = self.length_fast();
        Vec4::new(
            self.x.div_fast(len),
            self.y.div_fast(len),
            self.z.div_fast(len),
            self.w.div_fast(len),
        )
    }

    #[inline]
    pub fn normalize_fastest(self) -> Self {
        let len = self.length_fastest();
        Vec4::new(
            self.x.div_fastest(len),
            self.y.div_fastest(len),
            self.z.div_fastest(len),
            self.w.div_fastest(len),
        )
    }

    #[inline]
    pub fn distance(self, other: Self) -> Fixed64 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> Fixed64 {
        (other - self).length_sqr()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Fixed64) -> Self {
        Vec4::new(
            self.x.lerp(other.x, t),
            self.y.lerp(other.y, t),
            self.z.lerp(other.z, t),
            self.w.lerp(other.w, t),
        )
    }

    pub fn clamp_length(self, max: Fixed64) -> Self {
        let len = self.length();
        if len <= max || len == Fixed64::ZERO {
            return self;
        }
        let scale = |c: Fixed64| {
            Fixed64::from_raw(((c.raw() as i128 * max.raw() as i128) / len.raw() as i128) as i64)
        };
        Vec4::new(scale(self.x), scale(self.y), scale(self.z), scale(self.w))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec4::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec4::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Vec4::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec4::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec4::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vec4::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<Fixed64> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed64) -> Self {
        Vec4::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vec4::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl Div<Fixed64> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed64) -> Self {
        Vec4::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Rem for Vec4 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Vec4::new(self.x % rhs.x, self.y % rhs.y, self.z % rhs.z, self.w % rhs.w)
    }
}

impl Rem<Fixed64> for Vec4 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed64) -> Self {
        Vec4::new(self.x % rhs, self.y % rhs, self.z % rhs, self.w % rhs)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Fixed64> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed64) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed64> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed64) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_sqr_exact() {
        let v = Vec4::new(
            Fixed64::from_int(1),
            Fixed64::from_int(2),
            Fixed64::from_int(4),
            Fixed64::from_int(-2),
        );
        assert_eq!(v.length_sqr(), Fixed64::from_int(25));
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vec4::ONE * Fixed64::from_int(3);
        assert_eq!(v, Vec4::splat(Fixed64::from_int(3)));
        assert_eq!(v / Fixed64::from_int(3), Vec4::ONE);
    }
}
