//! 2-component Q32.32 vector

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::fixed64::Fixed64;

/// Deterministic 2D vector over [`Fixed64`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Vec2 {
    pub x: Fixed64,
    pub y: Fixed64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::splat(Fixed64::ZERO);
    pub const ONE: Vec2 = Vec2::splat(Fixed64::ONE);
    pub const X: Vec2 = Vec2::new(Fixed64::ONE, Fixed64::ZERO);
    pub const Y: Vec2 = Vec2::new(Fixed64::ZERO, Fixed64::ONE);

    #[inline]
    pub const fn new(x: Fixed64, y: Fixed64) -> Self {
        Vec2 { x, y }
    }

    #[inline]
    pub const fn splat(v: Fixed64) -> Self {
        Vec2 { x: v, y: v }
    }

    #[inline]
    pub fn dot(self, other: Self) -> Fixed64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (signed parallelogram area).
    #[inline]
    pub fn cross(self, other: Self) -> Fixed64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, accumulated in 128-bit before narrowing back.
    pub fn length_sqr(self) -> Fixed64 {
        let x = self.x.raw() as i128;
        let y = self.y.raw() as i128;
        Fixed64::from_raw((((x * x) + (y * y)) >> 32) as i64)
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
    pub fn distance(self, other: Self) -> Fixed64 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sqr(self, other: Self) -> Fixed64 {
        (other - self).length_sqr()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Fixed64) -> Self {
        Vec2::new(self.x.lerp(other.x, t), self.y.lerp(other.y, t))
    }

    pub fn clamp_length(self, max: Fixed64) -> Self {
        let len = self.length();
        if len <= max || len == Fixed64::ZERO {
            return self;
        }
        // One widened divide per component keeps the truncation at one ULP.
        let scale = |c: Fixed64| {
            Fixed64::from_raw(((c.raw() as i128 * max.raw() as i128) / len.raw() as i128) as i64)
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

impl Mul<Fixed64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed64) -> Self {
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

impl Div<Fixed64> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Fixed64) -> Self {
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

impl Rem<Fixed64> for Vec2 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Fixed64) -> Self {
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

impl MulAssign<Fixed64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fixed64) {
        *self = *self * rhs;
    }
}

impl DivAssign<Fixed64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: Fixed64) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
