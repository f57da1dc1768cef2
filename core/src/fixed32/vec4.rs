//! 4-component Q16.16 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed32::Fixed32;
use crate::fixed64::Fixed64;
use crate::raw::math64;

/// Deterministic 4D vector over [`Fixed32`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec4 {
    pub x: Fixed32,
    pub y: Fixed32,
    pub z: Fixed32,
    pub w: Fixed32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::splat(Fixed32::ZERO);
    pub const ONE: Vec4 = Vec4::splat(Fixed32::ONE);
    pub const X: Vec4 = Vec4::new(Fixed32::ONE, Fixed32::ZERO, Fixed32::ZERO, Fixed32::ZERO);
    pub const Y: Vec4 = Vec4::new(Fixed32::ZERO, Fixed32::ONE, Fixed32::ZERO, Fixed32::ZERO);
    pub const Z: Vec4 = Vec4::new(Fixed32::ZERO, Fixed32::ZERO, Fixed32::ONE, Fixed32::ZERO);
    pub const W: Vec4 = Vec4::new(Fixed32::ZERO, Fixed32::ZERO, Fixed32::ZERO, Fixed32::ONE);

    #[inline]
    pub const fn new(x: Fixed32, y: Fixed32, z: Fixed32, w: Fixed32) -> Self {
        Vec4 { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: Fixed32) -> Self {
        Vec4 { x: v, y: v, z: v, w: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length, accumulated in Q32.32.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.to_fixed64();
        let y = self.y.to_fixed64();
        let z = self.z.to_fixed64();
        let w = self.w.to_fixed64();
        x * x + y * y + z * z + w * w
    }

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
    pub fn distance(self, other: Self) -> Fixed32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> Fixed64 {
        (other - self).length_sqr()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Fixed32) -> Self {
        Vec4::new(
            self.x.lerp(other.x, t),
            self.y.lerp(other.y, t),
            self.z.lerp(other.z, t),
            self.w.lerp(other.w, t),
        )
    }

    pub fn clamp_length(self, max: Fixed32) -> Self {
        let len = self.length();
        if len <= max || len == Fixed32::ZERO {
            return self;
        }
        let scale = |c: Fixed32| {
            Fixed32::from_raw(((c.raw() as i64 * max.raw() as i64) / len.raw() as i64) as i32)
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

impl Mul<Fixed32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed32) -> Self {
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

impl Div<Fixed32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed32) -> Self {
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

impl Rem<Fixed32> for Vec4 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed32) -> Self {
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

impl MulAssign<Fixed32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed32) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed32) {
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
    fn test_length_exact() {
        // 1 + 4 + 16 + 4 = 25
        let v = Vec4::new(
            Fixed32::from_int(1),
            Fixed32::from_int(2),
            Fixed32::from_int(4),
            Fixed32::from_int(-2),
        );
        assert_eq!(v.length(), Fixed32::from_int(5));
    }

    #[test]
    fn test_dot_units() {
        assert_eq!(Vec4::X.dot(Vec4::Y), Fixed32::ZERO);
        assert_eq!(Vec4::W.dot(Vec4::W), Fixed32::ONE);
    }
}
