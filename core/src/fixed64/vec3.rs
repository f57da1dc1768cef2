//! 3-component Q32.32 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed64::Fixed64;

/// Deterministic 3D vector over [`Fixed64`].
///
/// This is the vector type the quaternion operates on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec3 {
    pub x: Fixed64,
    pub y: Fixed64,
    pub z: Fixed64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(Fixed64::ZERO);
    pub const ONE: Vec3 = Vec3::splat(Fixed64::ONE);
    pub const X: Vec3 = Vec3::new(Fixed64::ONE, Fixed64::ZERO, Fixed64::ZERO);
    pub const Y: Vec3 = Vec3::new(Fixed64::ZERO, Fixed64::ONE, Fixed64::ZERO);
    pub const Z: Vec3 = Vec3::new(Fixed64::ZERO, Fixed64::ZERO, Fixed64::ONE);

    #[inline]
    pub const fn new(x: Fixed64, y: Fixed64, z: Fixed64) -> Self {
        Vec3 { x, y, z }
    }

    #[inline]
    pub const fn splat(v: Fixed64) -> Self {
        Vec3 { x: v, y: v, z: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length, accumulated in 128-bit before narrowing back.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.raw() as i128;
        let y = self.y.raw() as i128;
        let z = self.z.raw() as i128;
        Fixed64::from_raw((((x * x) + (y * y) + (z * z)) >> 32) as i64)
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
    pub fn distance(self, other: Self) -> Fixed64 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> Fixed64 {
        (other - self).length_sqr()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Fixed64) -> Self {
        Vec3::new(
            self.x.lerp(other.x, t),
            self.y.lerp(other.y, t),
            self.z.lerp(other.z, t),
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

impl Mul<Fixed64> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed64) -> Self {
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

impl Div<Fixed64> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed64) -> Self {
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

impl Rem<Fixed64> for Vec3 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed64) -> Self {
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

impl MulAssign<Fixed64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed64) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed64) {
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
    }

    #[test]
    fn test_dot_orthogonal() {
        assert_eq!(Vec3::X.dot(Vec3::Y), Fixed64::ZERO);
        assert_eq!(Vec3::ONE.dot(Vec3::ONE), Fixed64::from_int(3));
    }

    #[test]
    fn test_length_sqr_exact() {
        let v = Vec3::new(
            Fixed64::from_int(2),
            Fixed64::from_int(3),
            Fixed64::from_int(6),
        );
        assert_eq!(v.length_sqr(), Fixed64::from_int(49));
    }
}
