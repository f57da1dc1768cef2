//! Q16.16 scalar wrapper
//!
//! `Fixed32` holds the raw `i32` (value = raw / 2^16) and forwards every
//! operation to `raw::math32`. The raw is the wire format: serde sees only
//! the integer, so a serialized value round-trips bit-exactly.
//!
//! CRITICAL: arithmetic wraps on overflow, like the raw kernel. The checked
//! surface is the constructor API (`try_from_f32`, `checked_ratio`), not the
//! arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::FixedError;
use crate::fixed64::Fixed64;
use crate::raw::math32;

/// Deterministic Q16.16 fixed-point number.
///
/// # Example
/// ```
/// use fixmath_core_rs::Fixed32;
///
/// let a = Fixed32::from_int(3);
/// let b = Fixed32::ratio(1, 2);
/// assert_eq!((a * b).to_f32(), 1.5);
/// assert_eq!(a * b, Fixed32::from_raw(98304));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed32(i32);

impl Fixed32 {
    pub const ZERO: Fixed32 = Fixed32(0);
    pub const ONE: Fixed32 = Fixed32(math32::ONE);
    pub const HALF: Fixed32 = Fixed32(math32::HALF);
    pub const TWO: Fixed32 = Fixed32(math32::ONE << 1);
    pub const MIN: Fixed32 = Fixed32(i32::MIN);
    pub const MAX: Fixed32 = Fixed32(i32::MAX);
    /// Smallest positive value, 2^-16.
    pub const EPSILON: Fixed32 = Fixed32(1);
    pub const PI: Fixed32 = Fixed32(math32::PI);
    pub const TWO_PI: Fixed32 = Fixed32(math32::TWO_PI);
    pub const HALF_PI: Fixed32 = Fixed32(math32::HALF_PI);
    pub const E: Fixed32 = Fixed32(math32::E);
    pub const LN2: Fixed32 = Fixed32(math32::LN2);

    /// Wrap an existing raw representation.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed32(raw)
    }

    /// The raw representation. This is the canonical wire format.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Construct from an integer. Wraps for |v| ≥ 2^15.
    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Fixed32(v.wrapping_shl(16))
    }

    /// Exact fraction n/d.
    ///
    /// A zero denominator is a domain error (panics with `safety-checks`,
    /// returns zero otherwise). Use [`Fixed32::checked_ratio`] for a
    /// `Result`.
    ///
    /// # Example
    /// ```
    /// use fixmath_core_rs::Fixed32;
    ///
    /// assert_eq!(Fixed32::ratio(1, 3).raw(), 21845);
    /// ```
    #[inline]
    pub fn ratio(n: i32, d: i32) -> Self {
        Fixed32(math32::div_precise(math32::from_int(n), math32::from_int(d)))
    }

    /// Exact fraction n/d, rejecting a zero denominator.
    pub fn checked_ratio(n: i32, d: i32) -> Result<Self, FixedError> {
        if d == 0 {
            return Err(FixedError::ZeroDenominator);
        }
        Ok(Fixed32(math32::div_precise(
            math32::from_int(n),
            math32::from_int(d),
        )))
    }

    /// Truncating float conversion. Out-of-range saturates, NaN becomes 0.
    ///
    /// Only use floats at the boundary of the deterministic world (config,
    /// display); never feed a float back into simulation state.
    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Fixed32(math32::from_f32(v))
    }

    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Fixed32(math32::from_f64(v))
    }

    /// Float conversion that rejects NaN, infinities and out-of-range input.
    pub fn try_from_f32(v: f32) -> Result<Self, FixedError> {
        Self::try_from_f64(v as f64)
    }

    pub fn try_from_f64(v: f64) -> Result<Self, FixedError> {
        if !v.is_finite() || !(-32768.0..32768.0).contains(&v) {
            return Err(FixedError::OutOfRange(v));
        }
        Ok(Fixed32(math32::from_f64(v)))
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        math32::to_f32(self.0)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        math32::to_f64(self.0)
    }

    /// Widen to Q32.32. Exact.
    #[inline]
    pub const fn to_fixed64(self) -> Fixed64 {
        Fixed64::from_raw((self.0 as i64) << 16)
    }

    #[inline]
    pub fn floor_to_int(self) -> i32 {
        math32::floor_to_int(self.0)
    }

    #[inline]
    pub fn ceil_to_int(self) -> i32 {
        math32::ceil_to_int(self.0)
    }

    /// Nearest integer; ties round toward +∞.
    #[inline]
    pub fn round_to_int(self) -> i32 {
        math32::round_to_int(self.0)
    }

    #[inline]
    pub fn floor(self) -> Self {
        Fixed32(math32::floor(self.0))
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Fixed32(math32::ceil(self.0))
    }

    #[inline]
    pub fn round(self) -> Self {
        Fixed32(math32::round(self.0))
    }

    /// Fractional part in [0, 1).
    #[inline]
    pub fn frac(self) -> Self {
        Fixed32(math32::frac(self.0))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Fixed32(math32::abs(self.0))
    }

    /// -1, 0 or +1.
    #[inline]
    pub fn sign(self) -> Self {
        Fixed32(math32::sign(self.0))
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
    ///
    /// # Example
    /// ```
    /// use fixmath_core_rs::Fixed32;
    ///
    /// let a = Fixed32::from_int(2);
    /// let b = Fixed32::from_int(4);
    /// assert_eq!(a.lerp(b, Fixed32::HALF), Fixed32::from_int(3));
    /// ```
    #[inline]
    pub fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Reciprocal-Newton division, precise tier (4 steps).
    ///
    /// The `/` operator performs the exact widened division; these tiers
    /// trade the wide divide for a fixed number of multiply steps.
    #[inline]
    pub fn div(self, rhs: Self) -> Self {
        Fixed32(math32::div(self.0, rhs.0))
    }

    /// Reciprocal-Newton division, fast tier (relative error ≤ 2^-14).
    #[inline]
    pub fn div_fast(self, rhs: Self) -> Self {
        Fixed32(math32::div_fast(self.0, rhs.0))
    }

    /// Reciprocal-Newton division, fastest tier (relative error ≤ 2^-10).
    #[inline]
    pub fn div_fastest(self, rhs: Self) -> Self {
        Fixed32(math32::div_fastest(self.0, rhs.0))
    }

    /// Exact square root (digit-by-digit, correct to one ULP).
    ///
    /// Negative input is a domain error.
    #[inline]
    pub fn sqrt_precise(self) -> Self {
        Fixed32(math32::sqrt_precise(self.0))
    }

    /// Newton square root, precise tier (3 steps).
    #[inline]
    pub fn sqrt(self) -> Self {
        Fixed32(math32::sqrt(self.0))
    }

    #[inline]
    pub fn sqrt_fast(self) -> Self {
        Fixed32(math32::sqrt_fast(self.0))
    }

    #[inline]
    pub fn sqrt_fastest(self) -> Self {
        Fixed32(math32::sqrt_fastest(self.0))
    }

    /// Reciprocal square root, precise tier. Domain error for x ≤ 0.
    #[inline]
    pub fn rsqrt(self) -> Self {
        Fixed32(math32::rsqrt(self.0))
    }

    #[inline]
    pub fn rsqrt_fast(self) -> Self {
        Fixed32(math32::rsqrt_fast(self.0))
    }

    #[inline]
    pub fn rsqrt_fastest(self) -> Self {
        Fixed32(math32::rsqrt_fastest(self.0))
    }

    /// Base-2 exponential. Saturates at the representable extremes.
    #[inline]
    pub fn exp2(self) -> Self {
        Fixed32(math32::exp2(self.0))
    }

    #[inline]
    pub fn exp2_fast(self) -> Self {
        Fixed32(math32::exp2_fast(self.0))
    }

    #[inline]
    pub fn exp2_fastest(self) -> Self {
        Fixed32(math32::exp2_fastest(self.0))
    }

    /// Natural exponential.
    #[inline]
    pub fn exp(self) -> Self {
        Fixed32(math32::exp(self.0))
    }

    #[inline]
    pub fn exp_fast(self) -> Self {
        Fixed32(math32::exp_fast(self.0))
    }

    #[inline]
    pub fn exp_fastest(self) -> Self {
        Fixed32(math32::exp_fastest(self.0))
    }

    /// Base-2 logarithm. Domain error for x ≤ 0.
    #[inline]
    pub fn log2(self) -> Self {
        Fixed32(math32::log2(self.0))
    }

    #[inline]
    pub fn log2_fast(self) -> Self {
        Fixed32(math32::log2_fast(self.0))
    }

    #[inline]
    pub fn log2_fastest(self) -> Self {
        Fixed32(math32::log2_fastest(self.0))
    }

    /// Natural logarithm. Domain error for x ≤ 0.
    #[inline]
    pub fn log(self) -> Self {
        Fixed32(math32::log(self.0))
    }

    #[inline]
    pub fn log_fast(self) -> Self {
        Fixed32(math32::log_fast(self.0))
    }

    #[inline]
    pub fn log_fastest(self) -> Self {
        Fixed32(math32::log_fastest(self.0))
    }

    /// x^e computed as 2^(e·log2 x). Domain error for x ≤ 0.
    #[inline]
    pub fn pow(self, e: Self) -> Self {
        Fixed32(math32::pow(self.0, e.0))
    }

    #[inline]
    pub fn pow_fast(self, e: Self) -> Self {
        Fixed32(math32::pow_fast(self.0, e.0))
    }

    #[inline]
    pub fn pow_fastest(self, e: Self) -> Self {
        Fixed32(math32::pow_fastest(self.0, e.0))
    }

    /// Sine of an angle in radians. Defined on the full raw range via
    /// wrapping phase reduction.
    ///
    /// # Example
    /// ```
    /// use fixmath_core_rs::Fixed32;
    ///
    /// let s = Fixed32::HALF_PI.sin();
    /// assert!((s - Fixed32::ONE).abs() <= Fixed32::from_raw(2));
    /// ```
    #[inline]
    pub fn sin(self) -> Self {
        Fixed32(math32::sin(self.0))
    }

    #[inline]
    pub fn sin_fast(self) -> Self {
        Fixed32(math32::sin_fast(self.0))
    }

    #[inline]
    pub fn sin_fastest(self) -> Self {
        Fixed32(math32::sin_fastest(self.0))
    }

    /// Cosine: exactly `(self + HALF_PI).sin()`.
    #[inline]
    pub fn cos(self) -> Self {
        Fixed32(math32::cos(self.0))
    }

    #[inline]
    pub fn cos_fast(self) -> Self {
        Fixed32(math32::cos_fast(self.0))
    }

    #[inline]
    pub fn cos_fastest(self) -> Self {
        Fixed32(math32::cos_fastest(self.0))
    }

    /// Tangent. Domain error where the cosine is zero.
    #[inline]
    pub fn tan(self) -> Self {
        Fixed32(math32::tan(self.0))
    }

    #[inline]
    pub fn tan_fast(self) -> Self {
        Fixed32(math32::tan_fast(self.0))
    }

    #[inline]
    pub fn tan_fastest(self) -> Self {
        Fixed32(math32::tan_fastest(self.0))
    }

    /// Four-quadrant arctangent of `self / x`, in (-π, π]. `atan2(0, 0) = 0`.
    #[inline]
    pub fn atan2(self, x: Self) -> Self {
        Fixed32(math32::atan2(self.0, x.0))
    }

    #[inline]
    pub fn atan2_fast(self, x: Self) -> Self {
        Fixed32(math32::atan2_fast(self.0, x.0))
    }

    #[inline]
    pub fn atan2_fastest(self, x: Self) -> Self {
        Fixed32(math32::atan2_fastest(self.0, x.0))
    }

    /// Arcsine, in [-π/2, π/2]. Domain error for |x| > 1.
    #[inline]
    pub fn asin(self) -> Self {
        Fixed32(math32::asin(self.0))
    }

    #[inline]
    pub fn asin_fast(self) -> Self {
        Fixed32(math32::asin_fast(self.0))
    }

    #[inline]
    pub fn asin_fastest(self) -> Self {
        Fixed32(math32::asin_fastest(self.0))
    }

    /// Arccosine, in [0, π]. Domain error for |x| > 1.
    #[inline]
    pub fn acos(self) -> Self {
        Fixed32(math32::acos(self.0))
    }

    #[inline]
    pub fn acos_fast(self) -> Self {
        Fixed32(math32::acos_fast(self.0))
    }

    #[inline]
    pub fn acos_fastest(self) -> Self {
        Fixed32(math32::acos_fastest(self.0))
    }
}

impl Add for Fixed32 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fixed32(math32::add(self.0, rhs.0))
    }
}

impl Sub for Fixed32 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fixed32(math32::sub(self.0, rhs.0))
    }
}

impl Mul for Fixed32 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fixed32(math32::mul(self.0, rhs.0))
    }
}

impl Div for Fixed32 {
    type Output = Self;
    /// Exact widened division; see [`Fixed32::div_fast`] for the Newton
    /// tiers.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Fixed32(math32::div_precise(self.0, rhs.0))
    }
}

impl Rem for Fixed32 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Fixed32(math32::rem(self.0, rhs.0))
    }
}

impl Neg for Fixed32 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Fixed32(math32::neg(self.0))
    }
}

impl AddAssign for Fixed32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed32 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed32 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed32 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl fmt::Display for Fixed32 {
    /// Exact decimal expansion to four fractional digits, no float involved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0 as i64;
        let sign = if raw < 0 { "-" } else { "" };
        let a = raw.unsigned_abs();
        let mut int = a >> 16;
        let mut frac = ((a & 0xFFFF) * 10_000 + (1 << 15)) >> 16;
        if frac == 10_000 {
            int += 1;
            frac = 0;
        }
        write!(f, "{}{}.{:04}", sign, int, frac)
    }
}
