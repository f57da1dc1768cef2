//! Q32.32 raw kernel
//!
//! The doubled-width mirror of `math32`: every function takes and returns
//! the raw `i64` representation (`value = raw / 2^32`) and follows the same
//! normalize / fixed-correction / denormalize shapes, evaluated in 128-bit
//! Q62 intermediates. Coefficients are derived independently from the same
//! compile-time anchors rather than copied from the 32-bit tables.

use super::consts;
use super::domain_error;

/// Fractional bits of the Q32.32 format.
pub const SHIFT: u32 = 32;
/// Raw 1.0.
pub const ONE: i64 = 1 << SHIFT;
/// Raw 0.5.
pub const HALF: i64 = 1 << (SHIFT - 1);
/// Raw π, rounded to nearest.
pub const PI: i64 = consts::round_shift(consts::PI_Q64, 32) as i64;
/// Raw 2π, rounded to nearest.
pub const TWO_PI: i64 = consts::round_shift(consts::PI_Q64, 31) as i64;
/// Raw π/2, rounded to nearest.
pub const HALF_PI: i64 = consts::round_shift(consts::PI_Q64, 33) as i64;
/// Raw e, rounded to nearest.
pub const E: i64 = consts::round_shift(consts::E_Q64, 32) as i64;
/// Raw ln 2, rounded to nearest.
pub const LN2: i64 = consts::round_shift(consts::LN2_Q64, 32) as i64;

const ONE_Q62: i128 = 1 << 62;
const LN2_Q62: i128 = (consts::LN2_Q64 >> 2) as i128;
const LN2_Q48: i128 = (consts::LN2_Q64 >> 16) as i128;
const LOG2E_Q62: i128 = (consts::LOG2E_Q64 >> 2) as i128;
const LOG2E_Q64: i128 = consts::LOG2E_Q64 as i128;
const SQRT2_Q62: i128 = consts::SQRT2_Q62 as i128;
const RSQRT2_Q62: i128 = consts::RSQRT2_Q62 as i128;
const TAN_PI_8_Q62: i128 = consts::TAN_PI_8_Q62 as i128;
const PI_Q62: i128 = (consts::PI_Q64 >> 2) as i128;
const HALF_PI_Q62: i128 = (consts::PI_Q64 >> 3) as i128;
const QUARTER_PI_Q62: i128 = (consts::PI_Q64 >> 4) as i128;
const RCP_TWO_PI_Q64: i128 = consts::RCP_TWO_PI_Q64 as i128;

/// Right shift with round-to-nearest (ties toward +∞).
#[inline]
fn rshift_round(v: i128, s: u32) -> i128 {
    if s == 0 {
        v
    } else {
        (v + (1i128 << (s - 1))) >> s
    }
}

// ── Conversions ─────────────────────────────────────────────────────────

/// Integer → raw. Wraps for |v| ≥ 2^31.
#[inline]
pub fn from_int(v: i64) -> i64 {
    v.wrapping_shl(SHIFT)
}

/// f32 → raw, truncating toward zero. Saturates out of range, NaN → 0.
#[inline]
pub fn from_f32(v: f32) -> i64 {
    (v as f64 * (ONE as f64)) as i64
}

/// f64 → raw, truncating toward zero.
#[inline]
pub fn from_f64(v: f64) -> i64 {
    (v * (ONE as f64)) as i64
}

#[inline]
pub fn to_f32(x: i64) -> f32 {
    (x as f64 / (ONE as f64)) as f32
}

#[inline]
pub fn to_f64(x: i64) -> f64 {
    x as f64 / (ONE as f64)
}

#[inline]
pub fn floor_to_int(x: i64) -> i64 {
    x >> SHIFT
}

#[inline]
pub fn ceil_to_int(x: i64) -> i64 {
    x.wrapping_add(ONE - 1) >> SHIFT
}

/// Nearest integer; ties round toward +∞.
#[inline]
pub fn round_to_int(x: i64) -> i64 {
    x.wrapping_add(HALF) >> SHIFT
}

#[inline]
pub fn floor(x: i64) -> i64 {
    x & !(ONE - 1)
}

#[inline]
pub fn ceil(x: i64) -> i64 {
    x.wrapping_add(ONE - 1) & !(ONE - 1)
}

#[inline]
pub fn round(x: i64) -> i64 {
    x.wrapping_add(HALF) & !(ONE - 1)
}

/// Fractional part, `x - floor(x)`, always in [0, 1).
#[inline]
pub fn frac(x: i64) -> i64 {
    x & (ONE - 1)
}

#[inline]
pub fn abs(x: i64) -> i64 {
    x.wrapping_abs()
}

#[inline]
pub fn neg(x: i64) -> i64 {
    x.wrapping_neg()
}

/// Raw -1, 0 or +1 by the sign of x.
#[inline]
pub fn sign(x: i64) -> i64 {
    if x > 0 {
        ONE
    } else if x < 0 {
        -ONE
    } else {
        0
    }
}

// ── Basic arithmetic ────────────────────────────────────────────────────

#[inline]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

#[inline]
pub fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

#[inline]
pub fn mul(a: i64, b: i64) -> i64 {
    (((a as i128) * (b as i128)) >> SHIFT) as i64
}

/// Truncated remainder on raws. Domain error for b = 0.
#[inline]
pub fn rem(a: i64, b: i64) -> i64 {
    if b == 0 {
        domain_error!("rem", "b", b);
    }
    a.wrapping_rem(b)
}

/// Exact division. Domain error for b = 0 or b = i64::MIN.
pub fn div_precise(a: i64, b: i64) -> i64 {
    if b == 0 || b == i64::MIN {
        domain_error!("div_precise", "b", b);
    }
    (((a as i128) << SHIFT) / (b as i128)) as i64
}

fn div_nr(a: i64, b: i64, steps: u32, name: &str) -> i64 {
    if b == 0 {
        domain_error!(name, "b", b);
    }
    let negative = (a < 0) != (b < 0);
    let a_abs = (a as i128).abs();
    let b_abs = b.unsigned_abs();
    let lz = b_abs.leading_zeros();
    let d = (((b_abs as u128) << lz) >> 1) as i128; // Q63 in [0.5, 1)
    let mut r = consts::RCP_SEED_A_Q62 - ((consts::RCP_SEED_B_Q62 * d) >> 63); // Q62
    let mut i = 0;
    while i < steps {
        let t = (1i128 << 63) - ((d * r) >> 63); // 2 - d·r, Q62
        r = (r * t) >> 62;
        i += 1;
    }
    let q = rshift_round(a_abs * r, 94 - lz);
    if negative {
        q.wrapping_neg() as i64
    } else {
        q as i64
    }
}

/// Reciprocal division, precise tier (4 Newton steps).
#[inline]
pub fn div(a: i64, b: i64) -> i64 {
    div_nr(a, b, 4, "div")
}

/// Reciprocal division, fast tier (3 steps; relative error ≤ 2^-14).
#[inline]
pub fn div_fast(a: i64, b: i64) -> i64 {
    div_nr(a, b, 3, "div_fast")
}

/// Reciprocal division, fastest tier (2 steps; relative error ≤ 2^-10).
#[inline]
pub fn div_fastest(a: i64, b: i64) -> i64 {
    div_nr(a, b, 2, "div_fastest")
}

// ── Square roots ────────────────────────────────────────────────────────

/// Digit-by-digit square root of the widened raw. Exact to one ULP.
pub fn sqrt_precise(x: i64) -> i64 {
    if x < 0 {
        domain_error!("sqrt_precise", "x", x);
    }
    consts::isqrt_u128((x as u128) << SHIFT) as i64
}

fn rsqrt_norm(m: i128, steps: u32) -> i128 {
    let mut y = consts::RSQRT_SEED_A_Q62 - ((consts::RSQRT_SEED_B_Q62 * m) >> 62);
    let mut i = 0;
    while i < steps {
        let my2 = (((m * y) >> 62) * y) >> 62;
        y = (y * ((3i128 << 62) - my2)) >> 63;
        i += 1;
    }
    y
}

/// Split a positive raw into a Q62 mantissa in [1, 2) and its binary
/// exponent relative to the fixed point.
#[inline]
fn normalize(x: i64) -> (i128, i32) {
    let e = 63 - (x as u64).leading_zeros() as i32;
    let m = if e >= 62 {
        (x as i128) >> (e - 62)
    } else {
        (x as i128) << (62 - e)
    };
    (m, e - SHIFT as i32)
}

fn sqrt_nr(x: i64, steps: u32, name: &str) -> i64 {
    if x < 0 {
        domain_error!(name, "x", x);
    }
    if x == 0 {
        return 0;
    }
    let (m, mut p) = normalize(x);
    let y = rsqrt_norm(m, steps);
    let mut s = (m * y) >> 62;
    if p & 1 != 0 {
        s = (s * SQRT2_Q62) >> 62;
        p -= 1;
    }
    rshift_round(s, (30 - p / 2) as u32) as i64
}

fn rsqrt_nr(x: i64, steps: u32, name: &str) -> i64 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let (m, mut p) = normalize(x);
    let mut y = rsqrt_norm(m, steps);
    if p & 1 != 0 {
        y = (y * RSQRT2_Q62) >> 62;
        p -= 1;
    }
    rshift_round(y, (30 + p / 2) as u32) as i64
}

/// Square root, precise tier (3 Newton steps).
#[inline]
pub fn sqrt(x: i64) -> i64 {
    sqrt_nr(x, 3, "sqrt")
}

#[inline]
pub fn sqrt_fast(x: i64) -> i64 {
    sqrt_nr(x, 2, "sqrt_fast")
}

#[inline]
pub fn sqrt_fastest(x: i64) -> i64 {
    sqrt_nr(x, 1, "sqrt_fastest")
}

/// Reciprocal square root, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn rsqrt(x: i64) -> i64 {
    rsqrt_nr(x, 3, "rsqrt")
}

#[inline]
pub fn rsqrt_fast(x: i64) -> i64 {
    rsqrt_nr(x, 2, "rsqrt_fast")
}

#[inline]
pub fn rsqrt_fastest(x: i64) -> i64 {
    rsqrt_nr(x, 1, "rsqrt_fastest")
}

// ── Exponentials and logarithms ─────────────────────────────────────────

fn exp2_q32(x: i128, coeffs: &[i64]) -> i64 {
    let ipart = x >> SHIFT;
    if ipart >= 31 {
        return i64::MAX;
    }
    if ipart < -80 {
        return 0;
    }
    let f = (x & (ONE as i128 - 1)) << 30; // Q62 fraction in [0, 1)
    let y = (f * LN2_Q62) >> 62;
    let mut acc = coeffs[coeffs.len() - 1] as i128;
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] as i128 + ((acc * y) >> 62);
    }
    rshift_round(acc, (30 - ipart) as u32) as i64
}

/// Base-2 exponential, precise tier. Saturates at `i64::MAX`, underflows
/// to 0.
#[inline]
pub fn exp2(x: i64) -> i64 {
    exp2_q32(x as i128, &consts::EXP64_PRECISE)
}

#[inline]
pub fn exp2_fast(x: i64) -> i64 {
    exp2_q32(x as i128, &consts::EXP64_FAST)
}

#[inline]
pub fn exp2_fastest(x: i64) -> i64 {
    exp2_q32(x as i128, &consts::EXP64_FASTEST)
}

#[inline]
fn exp_scaled(x: i64, coeffs: &[i64]) -> i64 {
    let t = ((x as i128) * LOG2E_Q62) >> 62;
    exp2_q32(t, coeffs)
}

/// Natural exponential, precise tier.
#[inline]
pub fn exp(x: i64) -> i64 {
    exp_scaled(x, &consts::EXP64_PRECISE)
}

#[inline]
pub fn exp_fast(x: i64) -> i64 {
    exp_scaled(x, &consts::EXP64_FAST)
}

#[inline]
pub fn exp_fastest(x: i64) -> i64 {
    exp_scaled(x, &consts::EXP64_FASTEST)
}

enum LogTier {
    Precise,
    Series(&'static [i64]),
}

fn log2_q62(x: i64, tier: &LogTier) -> i128 {
    let (mut m, p) = normalize(x);
    let mantissa = match tier {
        LogTier::Precise => {
            // One log bit per squaring, 36 bits of mantissa.
            let mut bits: i128 = 0;
            let mut i = 0;
            while i < 36 {
                m = (m * m) >> 62;
                bits <<= 1;
                if m >= (2 << 62) {
                    m >>= 1;
                    bits |= 1;
                }
                i += 1;
            }
            bits << 26 // Q36 → Q62
        }
        LogTier::Series(coeffs) => {
            let u = ((m - ONE_Q62) << 62) / (m + ONE_Q62);
            let u2 = (u * u) >> 62;
            let mut acc = coeffs[coeffs.len() - 1] as i128;
            let mut i = coeffs.len() - 1;
            while i > 0 {
                i -= 1;
                acc = coeffs[i] as i128 + ((acc * u2) >> 62);
            }
            let s = (acc * u) >> 62;
            (s * LOG2E_Q64) >> 63
        }
    };
    ((p as i128) << 62) + mantissa
}

fn log2_tiered(x: i64, tier: &LogTier, name: &str) -> i64 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    rshift_round(log2_q62(x, tier), 30) as i64
}

/// Base-2 logarithm, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn log2(x: i64) -> i64 {
    log2_tiered(x, &LogTier::Precise, "log2")
}

#[inline]
pub fn log2_fast(x: i64) -> i64 {
    log2_tiered(x, &LogTier::Series(&consts::LOG64_FAST), "log2_fast")
}

#[inline]
pub fn log2_fastest(x: i64) -> i64 {
    log2_tiered(x, &LogTier::Series(&consts::LOG64_FASTEST), "log2_fastest")
}

fn log_tiered(x: i64, tier: &LogTier, name: &str) -> i64 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let l = log2_q62(x, tier);
    let n = (l * LN2_Q48) >> 48;
    rshift_round(n, 30) as i64
}

/// Natural logarithm, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn log(x: i64) -> i64 {
    log_tiered(x, &LogTier::Precise, "log")
}

#[inline]
pub fn log_fast(x: i64) -> i64 {
    log_tiered(x, &LogTier::Series(&consts::LOG64_FAST), "log_fast")
}

#[inline]
pub fn log_fastest(x: i64) -> i64 {
    log_tiered(x, &LogTier::Series(&consts::LOG64_FASTEST), "log_fastest")
}

fn pow_tiered(x: i64, e: i64, log_tier: &LogTier, exp_coeffs: &[i64], name: &str) -> i64 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let l = log2_q62(x, log_tier) >> 16; // Q46
    let t = ((e as i128) * l) >> 46; // Q32 exponent
    exp2_q32(t, exp_coeffs)
}

/// x^e = 2^(e·log2 x), precise tier. Domain error for x ≤ 0.
#[inline]
pub fn pow(x: i64, e: i64) -> i64 {
    pow_tiered(x, e, &LogTier::Precise, &consts::EXP64_PRECISE, "pow")
}

#[inline]
pub fn pow_fast(x: i64, e: i64) -> i64 {
    pow_tiered(
        x,
        e,
        &LogTier::Series(&consts::LOG64_FAST),
        &consts::EXP64_FAST,
        "pow_fast",
    )
}

#[inline]
pub fn pow_fastest(x: i64, e: i64) -> i64 {
    pow_tiered(
        x,
        e,
        &LogTier::Series(&consts::LOG64_FASTEST),
        &consts::EXP64_FASTEST,
        "pow_fastest",
    )
}

// ── Trigonometry ────────────────────────────────────────────────────────

fn sin_poly(x: i64, coeffs: &[i64]) -> i64 {
    let phase = (((x as i128) * RCP_TWO_PI_Q64) >> SHIFT) as u64;
    let s = phase as i64; // Q62 quadrant variable in [-2, 2)
    let z: i128 = if (s ^ (s << 1)) < 0 {
        if s >= 0 {
            (1i128 << 63) - s as i128
        } else {
            -(1i128 << 63) - s as i128
        }
    } else {
        s as i128
    };
    let w = (z * z) >> 62;
    let mut acc = coeffs[coeffs.len() - 1] as i128;
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] as i128 + ((acc * w) >> 62);
    }
    rshift_round((acc * z) >> 62, 30) as i64
}

/// Sine, precise tier (degree-15 polynomial).
#[inline]
pub fn sin(x: i64) -> i64 {
    sin_poly(x, &consts::SIN64_PRECISE)
}

#[inline]
pub fn sin_fast(x: i64) -> i64 {
    sin_poly(x, &consts::SIN64_FAST)
}

#[inline]
pub fn sin_fastest(x: i64) -> i64 {
    sin_poly(x, &consts::SIN64_FASTEST)
}

/// Cosine: sin(x + π/2), exactly, by construction.
#[inline]
pub fn cos(x: i64) -> i64 {
    sin(x.wrapping_add(HALF_PI))
}

#[inline]
pub fn cos_fast(x: i64) -> i64 {
    sin_fast(x.wrapping_add(HALF_PI))
}

#[inline]
pub fn cos_fastest(x: i64) -> i64 {
    sin_fastest(x.wrapping_add(HALF_PI))
}

/// Tangent. Domain error where cos(x) = 0.
pub fn tan(x: i64) -> i64 {
    let c = cos(x);
    if c == 0 {
        domain_error!("tan", "x", x);
    }
    div_precise(sin(x), c)
}

pub fn tan_fast(x: i64) -> i64 {
    let c = cos_fast(x);
    if c == 0 {
        domain_error!("tan_fast", "x", x);
    }
    div_precise(sin_fast(x), c)
}

pub fn tan_fastest(x: i64) -> i64 {
    let c = cos_fastest(x);
    if c == 0 {
        domain_error!("tan_fastest", "x", x);
    }
    div_precise(sin_fastest(x), c)
}

fn atan_poly(k: i128, coeffs: &[i64]) -> i128 {
    let w = (k * k) >> 62;
    let mut acc = coeffs[coeffs.len() - 1] as i128;
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] as i128 + ((acc * w) >> 62);
    }
    (acc * k) >> 62
}

fn atan2_tiered(y: i64, x: i64, coeffs: &[i64]) -> i64 {
    if y == 0 && x == 0 {
        return 0;
    }
    let ay = (y as i128).abs();
    let ax = (x as i128).abs();
    let (num, den) = if ay <= ax { (ay, ax) } else { (ax, ay) };
    let k = (num << 62) / den;
    let base = if k > TAN_PI_8_Q62 {
        let kr = ((k - ONE_Q62) << 62) / (k + ONE_Q62);
        QUARTER_PI_Q62 + atan_poly(kr, coeffs)
    } else {
        atan_poly(k, coeffs)
    };
    let mut ang = base;
    if ay > ax {
        ang = HALF_PI_Q62 - ang;
    }
    if x < 0 {
        ang = PI_Q62 - ang;
    }
    if y < 0 {
        ang = -ang;
    }
    rshift_round(ang, 30) as i64
}

/// Arctangent of y/x with full octant correction, precise tier.
#[inline]
pub fn atan2(y: i64, x: i64) -> i64 {
    atan2_tiered(y, x, &consts::ATAN64_PRECISE)
}

#[inline]
pub fn atan2_fast(y: i64, x: i64) -> i64 {
    atan2_tiered(y, x, &consts::ATAN64_FAST)
}

#[inline]
pub fn atan2_fastest(y: i64, x: i64) -> i64 {
    atan2_tiered(y, x, &consts::ATAN64_FASTEST)
}

fn asin_sqrt(x: i64, name: &str) -> (i64, i64) {
    if !(-ONE..=ONE).contains(&x) {
        #[cfg(feature = "safety-checks")]
        panic!("{}: argument `x` out of domain (raw {})", name, x);
        #[cfg(not(feature = "safety-checks"))]
        {
            let _ = name;
            return (0, 0);
        }
    }
    let t = mul(ONE + x, ONE - x);
    (x, sqrt_precise(t))
}

/// Arcsine: atan2(x, √((1+x)(1-x))). Domain error for |x| > 1.
pub fn asin(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "asin");
    if x0 == 0 && s == 0 {
        return 0;
    }
    atan2(x0, s)
}

pub fn asin_fast(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "asin_fast");
    if x0 == 0 && s == 0 {
        return 0;
    }
    atan2_fast(x0, s)
}

pub fn asin_fastest(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "asin_fastest");
    if x0 == 0 && s == 0 {
        return 0;
    }
    atan2_fastest(x0, s)
}

/// Arccosine: the complement, in [0, π]. Domain error for |x| > 1.
pub fn acos(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "acos");
    if x0 == 0 && s == 0 && x != 0 {
        return 0;
    }
    atan2(s, x0)
}

pub fn acos_fast(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "acos_fast");
    if x0 == 0 && s == 0 && x != 0 {
        return 0;
    }
    atan2_fast(s, x0)
}

pub fn acos_fastest(x: i64) -> i64 {
    let (x0, s) = asin_sqrt(x, "acos_fastest");
    if x0 == 0 && s == 0 && x != 0 {
        return 0;
    }
    atan2_fastest(s, x0)
}
