//! 3-component Q16.16 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed32::Fixed32;
use crate::fixed64::Fixed64;
use crate::raw::math64;

/// Deterministic 3D vector over [`Fixed32`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec3 {
    pub x: Fixed32,
    pub y: Fixed32,
    pub z: Fixed32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(Fixed32::ZERO);
    pub const ONE: Vec3 = Vec3::splat(Fixed32::ONE);
    pub const X: Vec3 = Vec3::new(Fixed32::ONE, Fixed32::ZERO, Fixed32::ZERO);
    pub const Y: Vec3 = Vec3::new(Fixed32::ZERO, Fixed32::ONE, Fixed32::ZERO);
    pub const Z: Vec3 = Vec3::new(Fixed32::ZERO, Fixed32::ZERO, Fixed32::ONE);

    #[inline]
    pub const fn new(x: Fixed32, y: Fixed32, z: Fixed32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline]
    pub const fn splat(v: Fixed32) -> Self {
        Vec3 { x: v, y: v, z: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// # Example
    /// ```
    /// use fixmath_core_rs::Vec3;
    ///
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length, accumulated in Q32.32.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.to_fixed64();
        let y = self.y.to_fixed64();
        let z = self.z.to_fixed64();
        x * x + y * y + z * z
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
        Vec3::new(self.x / len, self.y / len, self.z / len)
    }

    #[inline]
    pub fn normalize_fast(self) -> Self {
        let len = self.length_fast();
        Vec3::new(
            self.x.div_fast(len),
            self.y.div_fast(len),
            self.z.div_fast(len),
        )
    }

    #[inline]
    pub fn normalize_fastest(self) -> Self {
        let len = self.length_fastest();
        Vec3::new(
            self.x.div_fastest(len),
            self.y.div_fastest(len),
            self.z.div_fastest(len),
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
        Vec3::new(
            self.x.lerp(other.x, t),
            self.y.lerp(other.y, t),
            self.z.lerp(other.z, t),
        )
    }

    pub fn clamp_length(self, max: Fixed32) -> Self {
        let len = self.length();
        if len <= max || len == Fixed32::ZERO {
            return self;
        }
        // One widened divide per component keeps the truncation at one ULP.
        let scale = |c: Fixed32| {
            Fixed32::from_raw(((c.raw() as i64 * max.raw() as i64) / len.raw() as i64) as i32)
        };
        Vec3::new(scale(self.x), scale(self.y), scale(self.z))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Vec3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Vec3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Vec3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vec3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<Fixed32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed32) -> Self {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vec3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<Fixed32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed32) -> Self {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Rem for Vec3 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Vec3::new(self.x % rhs.x, self.y % rhs.y, self.z % rhs.z)
    }
}

impl Rem<Fixed32> for Vec3 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed32) -> Self {
        Vec3::new(self.x % rhs, self.y % rhs, self.z % rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<Fixed32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed32) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_axes() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_cross_orthogonality() {
        let a = Vec3::new(Fixed32::from_int(2), Fixed32::from_int(-3), Fixed32::from_int(1));
        let b = Vec3::new(Fixed32::from_int(4), Fixed32::from_int(1), Fixed32::from_int(-5));
        let c = a.cross(b);
        assert_eq!(c.dot(a), Fixed32::ZERO);
        assert_eq!(c.dot(b), Fixed32::ZERO);
    }

    #[test]
    fn test_length_exact() {
        let v = Vec3::new(Fixed32::from_int(2), Fixed32::from_int(3), Fixed32::from_int(6));
        assert_eq!(v.length(), Fixed32::from_int(7));
    }
}
