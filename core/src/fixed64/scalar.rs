//! Q32.32 scalar wrapper
//!
//! Same surface as `fixed32::Fixed32`, forwarding to `raw::math64`. The raw
//! `i64` is the wire format.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::FixedError;
use crate::fixed32::Fixed32;
use crate::raw::math64;

/// Deterministic Q32.32 fixed-point number.
///
/// # Example
/// ```
/// use fixmath_core_rs::Fixed64;
///
/// let x = Fixed64::ratio(1, 3);
/// let y = x * Fixed64::from_int(3);
/// assert!((y - Fixed64::ONE).abs() <= Fixed64::EPSILON * Fixed64::from_int(3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed64(i64);

impl Fixed64 {
    pub const ZERO: Fixed64 = Fixed64(0);
    pub const ONE: Fixed64 = Fixed64(math64::ONE);
    pub const HALF: Fixed64 = Fixed64(math64::HALF);
    pub const TWO: Fixed64 = Fixed64(math64::ONE << 1);
    pub const MIN: Fixed64 = Fixed64(i64::MIN);
    pub const MAX: Fixed64 = Fixed64(i64::MAX);
    /// Smallest positive value, 2^-32.
    pub const EPSILON: Fixed64 = Fixed64(1);
    pub const PI: Fixed64 = Fixed64(math64::PI);
    pub const TWO_PI: Fixed64 = Fixed64(math64::TWO_PI);
    pub const HALF_PI: Fixed64 = Fixed64(math64::HALF_PI);
    pub const E: Fixed64 = Fixed64(math64::E);
    pub const LN2: Fixed64 = Fixed64(math64::LN2);

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Fixed64(raw)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Construct from an integer. Wraps for |v| ≥ 2^31.
    #[inline]
    pub const fn from_int(v: i64) -> Self {
        Fixed64(v.wrapping_shl(32))
    }

    /// Exact fraction n/d. Zero denominator is a domain error.
    #[inline]
    pub fn ratio(n: i64, d: i64) -> Self {
        Fixed64(math64::div_precise(math64::from_int(n), math64::from_int(d)))
    }

    pub fn checked_ratio(n: i64, d: i64) -> Result<Self, FixedError> {
        if d == 0 {
            return Err(FixedError::ZeroDenominator);
        }
        Ok(Fixed64(math64::div_precise(
            math64::from_int(n),
            math64::from_int(d),
        )))
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Fixed64(math64::from_f32(v))
    }

    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Fixed64(math64::from_f64(v))
    }

    pub fn try_from_f32(v: f32) -> Result<Self, FixedError> {
        Self::try_from_f64(v as f64)
    }

    pub fn try_from_f64(v: f64) -> Result<Self, FixedError> {
        if !v.is_finite() || !(-2147483648.0..2147483648.0).contains(&v) {
            return Err(FixedError::OutOfRange(v));
        }
        Ok(Fixed64(math64::from_f64(v)))
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        math64::to_f32(self.0)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        math64::to_f64(self.0)
    }

    /// Narrow to Q16.16, rounding to nearest. Values outside the narrow
    /// range wrap.
    #[inline]
    pub const fn to_fixed32(self) -> Fixed32 {
        Fixed32::from_raw((self.0.wrapping_add(1 << 15) >> 16) as i32)
    }

    #[inline]
    pub fn floor_to_int(self) -> i64 {
        math64::floor_to_int(self.0)
    }

    #[inline]
    pub fn ceil_to_int(self) -> i64 {
        math64::ceil_to_int(self.0)
    }

    /// Nearest integer; ties round toward +∞.
    #[inline]
    pub fn round_to_int(self) -> i64 {
        math64::round_to_int(self.0)
    }

    #[inline]
    pub fn floor(self) -> Self {
        Fixed64(math64::floor(self.0))
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Fixed64(math64::ceil(self.0))
    }

    #[inline]
    pub fn round(self) -> Self {
        Fixed64(math64::round(self.0))
    }

    /// Fractional part in [0, 1).
    #[inline]
    pub fn frac(self) -> Self {
        Fixed64(math64::frac(self.0))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Fixed64(math64::abs(self.0))
    }

    #[inline]
    pub fn sign(self) -> Self {
        Fixed64(math64::sign(self.0))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Linear interpolation `self + (other - self) * t`, one rounding.
    #[inline]
    pub fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Reciprocal-Newton division, precise tier (4 steps). The `/` operator
    /// is the exact widened division.
    #[inline]
    pub fn div(self, rhs: Self) -> Self {
        Fixed64(math64::div(self.0, rhs.0))
    }

    #[inline]
    pub fn div_fast(self, rhs: Self) -> Self {
        Fixed64(math64::div_fast(self.0, rhs.0))
    }

    #[inline]
    pub fn div_fastest(self, rhs: Self) -> Self {
        Fixed64(math64::div_fastest(self.0, rhs.0))
    }

    /// Exact square root, correct to one ULP. Domain error for x < 0.
    #[inline]
    pub fn sqrt_precise(self) -> Self {
        Fixed64(math64::sqrt_precise(self.0))
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        Fixed64(math64::sqrt(self.0))
    }

    #[inline]
    pub fn sqrt_fast(self) -> Self {
        Fixed64(math64::sqrt_fast(self.0))
    }

    #[inline]
    pub fn sqrt_fastest(self) -> Self {
        Fixed64(math64::sqrt_fastest(self.0))
    }

    /// Reciprocal square root. Domain error for x ≤ 0.
    #[inline]
    pub fn rsqrt(self) -> Self {
        Fixed64(math64::rsqrt(self.0))
    }

    #[inline]
    pub fn rsqrt_fast(self) -> Self {
        Fixed64(math64::rsqrt_fast(self.0))
    }

    #[inline]
    pub fn rsqrt_fastest(self) -> Self {
        Fixed64(math64::rsqrt_fastest(self.0))
    }

    /// Base-2 exponential. Saturates at the representable extremes.
    #[inline]
    pub fn exp2(self) -> Self {
        Fixed64(math64::exp2(self.0))
    }

    #[inline]
    pub fn exp2_fast(self) -> Self {
        Fixed64(math64::exp2_fast(self.0))
    }

    #[inline]
    pub fn exp2_fastest(self) -> Self {
        Fixed64(math64::exp2_fastest(self.0))
    }

    #[inline]
    pub fn exp(self) -> Self {
        Fixed64(math64::exp(self.0))
    }

    #[inline]
    pub fn exp_fast(self) -> Self {
        Fixed64(math64::exp_fast(self.0))
    }

    #[inline]
    pub fn exp_fastest(self) -> Self {
        Fixed64(math64::exp_fastest(self.0))
    }

    /// Base-2 logarithm. Domain error for x ≤ 0.
    #[inline]
    pub fn log2(self) -> Self {
        Fixed64(math64::log2(self.0))
    }

    #[inline]
    pub fn log2_fast(self) -> Self {
        Fixed64(math64::log2_fast(self.0))
    }

    #[inline]
    pub fn log2_fastest(self) -> Self {
        Fixed64(math64::log2_fastest(self.0))
    }

    #[inline]
    pub fn log(self) -> Self {
        Fixed64(math64::log(self.0))
    }

    #[inline]
    pub fn log_fast(self) -> Self {
        Fixed64(math64::log_fast(self.0))
    }

    #[inline]
    pub fn log_fastest(self) -> Self {
        Fixed64(math64::log_fastest(self.0))
    }

    /// x^e computed as 2^(e·log2 x). Domain error for x ≤ 0.
    #[inline]
    pub fn pow(self, e: Self) -> Self {
        Fixed64(math64::pow(self.0, e.0))
    }

    #[inline]
    pub fn pow_fast(self, e: Self) -> Self {
        Fixed64(math64::pow_fast(self.0, e.0))
    }

    #[inline]
    pub fn pow_fastest(self, e: Self) -> Self {
        Fixed64(math64::pow_fastest(self.0, e.0))
    }

    /// Sine of an angle in radians, wrapping phase reduction.
    #[inline]
    pub fn sin(self) -> Self {
        Fixed64(math64::sin(self.0))
    }

    #[inline]
    pub fn sin_fast(self) -> Self {
        Fixed64(math64::sin_fast(self.0))
    }

    #[inline]
    pub fn sin_fastest(self) -> Self {
        Fixed64(math64::sin_fastest(self.0))
    }

    /// Cosine: exactly `(self + HALF_PI).sin()`.
    #[inline]
    pub fn cos(self) -> Self {
        Fixed64(math64::cos(self.0))
    }

    #[inline]
    pub fn cos_fast(self) -> Self {
        Fixed64(math64::cos_fast(self.0))
    }

    #[inline]
    pub fn cos_fastest(self) -> Self {
        Fixed64(math64::cos_fastest(self.0))
    }

    /// Tangent. Domain error where the cosine is zero.
    #[inline]
    pub fn tan(self) -> Self {
        Fixed64(math64::tan(self.0))
    }

    #[inline]
    pub fn tan_fast(self) -> Self {
        Fixed64(math64::tan_fast(self.0))
    }

    #[inline]
    pub fn tan_fastest(self) -> Self {
        Fixed64(math64::tan_fastest(self.0))
    }

    /// Four-quadrant arctangent of `self / x`. `atan2(0, 0) = 0`.
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        Fixed64(math64::atan2(self.0, x.0))
    }

    #[inline]
    pub fn atan2_fast(self, x: Self) -> Self {
        Fixed64(math64::atan2_fast(self.0, x.0))
    }

    #[inline]
    pub fn atan2_fastest(self, x: Self) -> Self {
        Fixed64(math64::atan2_fastest(self.0, x.0))
    }

    /// Arcsine, in [-π/2, π/2]. Domain error for |x| > 1.
    #[inline]
    pub fn asin(self) -> Self {
        Fixed64(math64::asin(self.0))
    }

    #[inline]
    pub fn asin_fast(self) -> Self {
        Fixed64(math64::asin_fast(self.0))
    }

    #[inline]
    pub fn asin_fastest(self) -> Self {
        Fixed64(math64::asin_fastest(self.0))
    }

    /// Arccosine, in [0, π]. Domain error for |x| > 1.
    #[inline]
    pub fn acos(self) -> Self {
        Fixed64(math64::acos(self.0))
    }

    #[inline]
    pub fn acos_fast(self) -> Self {
        Fixed64(math64::acos_fast(self.0))
    }

    #[inline]
    pub fn acos_fastest(self) -> Self {
        Fixed64(math64::acos_fastest(self.0))
    }
}

impl Add for Fixed64 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fixed64(math64::add(self.0, rhs.0))
    }
}

impl Sub for Fixed64 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fixed64(math64::sub(self.0, rhs.0))
    }
}

impl Mul for Fixed64 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fixed64(math64::mul(self.0, rhs.0))
    }
}

impl Div for Fixed64 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Fixed64(math64::div_precise(self.0, rhs.0))
    }
}

impl Rem for Fixed64 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Fixed64(math64::rem(self.0, rhs.0))
    }
}

impl Neg for Fixed64 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Fixed64(math64::neg(self.0))
    }
}

impl AddAssign for Fixed64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed64 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed64 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed64 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl fmt::Display for Fixed64 {
    /// Exact decimal expansion to nine fractional digits, no float involved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let a = self.0.unsigned_abs();
        let mut int = a >> 32;
        let mut frac = ((a & 0xFFFF_FFFF) * 1_000_000_000 + (1 << 31)) >> 32;
        if frac == 1_000_000_000 {
            int += 1;
            frac = 0;
        }
        write!(f, "{}{}.{:09}", sign, int, frac)
    }
}
