//! Q16.16 raw kernel
//!
//! Every function takes and returns the raw `i32` representation
//! (`value = raw / 2^16`). Arithmetic wraps per two's complement; domain
//! errors follow the `safety-checks` toggle (panic vs raw zero).
//!
//! Transcendentals follow one shape: reduce the argument onto a small
//! interval by leading-zero-count normalization (or a wrapping phase
//! multiply for the trig family), correct with a fixed-degree polynomial or
//! a fixed number of Newton steps evaluated in 64-bit Q30 intermediates,
//! then undo the reduction. Tiered variants (`_fast`, `_fastest`) keep the
//! identical shape and only shorten the correction.

use super::consts;
use super::domain_error;
use super::math64;

/// Fractional bits of the Q16.16 format.
pub const SHIFT: u32 = 16;
/// Raw 1.0.
pub const ONE: i32 = 1 << SHIFT;
/// Raw 0.5.
pub const HALF: i32 = 1 << (SHIFT - 1);
/// Raw π, rounded to nearest.
pub const PI: i32 = consts::round_shift(consts::PI_Q64, 48) as i32;
/// Raw 2π, rounded to nearest.
pub const TWO_PI: i32 = consts::round_shift(consts::PI_Q64, 47) as i32;
/// Raw π/2, rounded to nearest.
pub const HALF_PI: i32 = consts::round_shift(consts::PI_Q64, 49) as i32;
/// Raw e, rounded to nearest.
pub const E: i32 = consts::round_shift(consts::E_Q64, 48) as i32;
/// Raw ln 2, rounded to nearest.
pub const LN2: i32 = consts::round_shift(consts::LN2_Q64, 48) as i32;

const ONE_Q30: i64 = 1 << 30;
const LN2_Q30: i64 = consts::round_shift(consts::LN2_Q64, 34) as i64;
const LOG2E_Q32: i64 = consts::round_shift(consts::LOG2E_Q64, 32) as i64;
const LN2_Q32: i64 = consts::round_shift(consts::LN2_Q64, 32) as i64;
const LOG2E_Q48: i128 = (consts::LOG2E_Q64 >> 16) as i128;
const SQRT2_Q30: i64 = consts::round_shift(consts::SQRT2_Q62, 32) as i64;
const RSQRT2_Q30: i64 = consts::round_shift(consts::RSQRT2_Q62, 32) as i64;
const TAN_PI_8_Q30: i64 = (consts::TAN_PI_8_Q62 >> 32) as i64;
const PI_Q30: i64 = consts::round_shift(consts::PI_Q64, 34) as i64;
const HALF_PI_Q30: i64 = consts::round_shift(consts::PI_Q64, 35) as i64;
const QUARTER_PI_Q30: i64 = consts::round_shift(consts::PI_Q64, 36) as i64;
const RCP_TWO_PI_Q32: i64 = consts::round_shift(consts::RCP_TWO_PI_Q64, 32) as i64;

/// Right shift with round-to-nearest (ties toward +∞).
#[inline]
fn rshift_round(v: i64, s: u32) -> i64 {
    if s == 0 {
        v
    } else {
        (v + (1i64 << (s - 1))) >> s
    }
}

// ── Conversions ─────────────────────────────────────────────────────────

/// Integer → raw. Wraps for |v| ≥ 2^15.
#[inline]
pub fn from_int(v: i32) -> i32 {
    v.wrapping_shl(SHIFT)
}

/// f32 → raw, truncating toward zero. Out-of-range saturates, NaN → 0
/// (Rust cast semantics: deterministic and defined).
#[inline]
pub fn from_f32(v: f32) -> i32 {
    (v as f64 * (ONE as f64)) as i32
}

/// f64 → raw, truncating toward zero.
#[inline]
pub fn from_f64(v: f64) -> i32 {
    (v * (ONE as f64)) as i32
}

#[inline]
pub fn to_f32(x: i32) -> f32 {
    (x as f64 / (ONE as f64)) as f32
}

#[inline]
pub fn to_f64(x: i32) -> f64 {
    x as f64 / (ONE as f64)
}

/// Largest integer ≤ x, as an integer.
#[inline]
pub fn floor_to_int(x: i32) -> i32 {
    x >> SHIFT
}

/// Smallest integer ≥ x, as an integer.
#[inline]
pub fn ceil_to_int(x: i32) -> i32 {
    x.wrapping_add(ONE - 1) >> SHIFT
}

/// Nearest integer; ties round toward +∞ (half-ULP bias then floor).
#[inline]
pub fn round_to_int(x: i32) -> i32 {
    x.wrapping_add(HALF) >> SHIFT
}

/// Largest integral raw ≤ x.
#[inline]
pub fn floor(x: i32) -> i32 {
    x & !(ONE - 1)
}

/// Smallest integral raw ≥ x.
#[inline]
pub fn ceil(x: i32) -> i32 {
    x.wrapping_add(ONE - 1) & !(ONE - 1)
}

/// Nearest integral raw; ties toward +∞.
#[inline]
pub fn round(x: i32) -> i32 {
    x.wrapping_add(HALF) & !(ONE - 1)
}

/// Fractional part, `x - floor(x)`, always in [0, 1).
#[inline]
pub fn frac(x: i32) -> i32 {
    x & (ONE - 1)
}

#[inline]
pub fn abs(x: i32) -> i32 {
    x.wrapping_abs()
}

#[inline]
pub fn neg(x: i32) -> i32 {
    x.wrapping_neg()
}

/// Raw -1, 0 or +1 by the sign of x.
#[inline]
pub fn sign(x: i32) -> i32 {
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
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

#[inline]
pub fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Widen, multiply, shift back. No intermediate overflow within the
/// representable range; the final narrowing wraps.
#[inline]
pub fn mul(a: i32, b: i32) -> i32 {
    (((a as i64) * (b as i64)) >> SHIFT) as i32
}

/// Truncated remainder on raws. Domain error for b = 0.
#[inline]
pub fn rem(a: i32, b: i32) -> i32 {
    if b == 0 {
        domain_error!("rem", "b", b);
    }
    a.wrapping_rem(b)
}

/// Exact division: widened numerator over raw denominator, truncated
/// toward zero. Domain error for b = 0 or b = i32::MIN.
pub fn div_precise(a: i32, b: i32) -> i32 {
    if b == 0 || b == i32::MIN {
        domain_error!("div_precise", "b", b);
    }
    (((a as i64) << SHIFT) / (b as i64)) as i32
}

/// Normalized-reciprocal division: |b| is scaled into [0.5, 1) by leading
/// zero count, a linear minimax seed (48/17 − 32/17·d) is refined by
/// `steps` Newton iterations in Q30, and the removed exponent and signs are
/// reapplied.
fn div_nr(a: i32, b: i32, steps: u32, name: &str) -> i32 {
    if b == 0 {
        domain_error!(name, "b", b);
    }
    let negative = (a < 0) != (b < 0);
    let a_abs = (a as i64).abs();
    let b_abs = b.unsigned_abs();
    let lz = b_abs.leading_zeros();
    let d = (((b_abs as u64) << lz) >> 1) as i64; // Q31 in [0.5, 1)
    let mut r = consts::RCP_SEED_A_Q30 - ((consts::RCP_SEED_B_Q30 * d) >> 31); // Q30
    let mut i = 0;
    while i < steps {
        let t = (1i64 << 31) - ((d * r) >> 31); // 2 - d·r, Q30
        r = (r * t) >> 30;
        i += 1;
    }
    let q = rshift_round(a_abs * r, 46 - lz);
    if negative {
        q.wrapping_neg() as i32
    } else {
        q as i32
    }
}

/// Reciprocal division, precise tier (4 Newton steps; accurate to a couple
/// of output ULP).
#[inline]
pub fn div(a: i32, b: i32) -> i32 {
    div_nr(a, b, 4, "div")
}

/// Reciprocal division, fast tier (3 steps; relative error ≤ 2^-14).
#[inline]
pub fn div_fast(a: i32, b: i32) -> i32 {
    div_nr(a, b, 3, "div_fast")
}

/// Reciprocal division, fastest tier (2 steps; relative error ≤ 2^-10).
#[inline]
pub fn div_fastest(a: i32, b: i32) -> i32 {
    div_nr(a, b, 2, "div_fastest")
}

// ── Square roots ────────────────────────────────────────────────────────

/// Digit-by-digit square root of the widened raw. Exact to one ULP; the
/// ground-truth tier. Domain error for x < 0.
pub fn sqrt_precise(x: i32) -> i32 {
    if x < 0 {
        domain_error!("sqrt_precise", "x", x);
    }
    consts::isqrt_u128((x as u128) << SHIFT) as i32
}

/// Newton refinement of 1/√m for m ∈ [1, 2) in Q30.
fn rsqrt_norm(m: i64, steps: u32) -> i64 {
    let mut y = consts::RSQRT_SEED_A_Q30 - ((consts::RSQRT_SEED_B_Q30 * m) >> 30);
    let mut i = 0;
    while i < steps {
        let my2 = (((m * y) >> 30) * y) >> 30;
        y = (y * ((3i64 << 30) - my2)) >> 31;
        i += 1;
    }
    y
}

/// Split a positive raw into a Q30 mantissa in [1, 2) and its binary
/// exponent relative to the fixed point.
#[inline]
fn normalize(x: i32) -> (i64, i32) {
    let e = 31 - (x as u32).leading_zeros() as i32;
    let m = if e >= 30 {
        (x as i64) >> (e - 30)
    } else {
        (x as i64) << (30 - e)
    };
    (m, e - SHIFT as i32)
}

fn sqrt_nr(x: i32, steps: u32, name: &str) -> i32 {
    if x < 0 {
        domain_error!(name, "x", x);
    }
    if x == 0 {
        return 0;
    }
    let (m, mut p) = normalize(x);
    let y = rsqrt_norm(m, steps);
    let mut s = (m * y) >> 30; // √m in [1, √2), Q30
    if p & 1 != 0 {
        // odd exponent: fold the leftover half power into the mantissa
        s = (s * SQRT2_Q30) >> 30;
        p -= 1;
    }
    rshift_round(s, (14 - p / 2) as u32) as i32
}

fn rsqrt_nr(x: i32, steps: u32, name: &str) -> i32 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let (m, mut p) = normalize(x);
    let mut y = rsqrt_norm(m, steps);
    if p & 1 != 0 {
        y = (y * RSQRT2_Q30) >> 30;
        p -= 1;
    }
    rshift_round(y, (14 + p / 2) as u32) as i32
}

/// Square root, precise tier (3 Newton steps; format-limited accuracy).
#[inline]
pub fn sqrt(x: i32) -> i32 {
    sqrt_nr(x, 3, "sqrt")
}

/// Square root, fast tier (2 steps; relative error ≤ 2^-18).
#[inline]
pub fn sqrt_fast(x: i32) -> i32 {
    sqrt_nr(x, 2, "sqrt_fast")
}

/// Square root, fastest tier (1 step; relative error ≤ 2^-9).
#[inline]
pub fn sqrt_fastest(x: i32) -> i32 {
    sqrt_nr(x, 1, "sqrt_fastest")
}

/// Reciprocal square root, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn rsqrt(x: i32) -> i32 {
    rsqrt_nr(x, 3, "rsqrt")
}

/// Reciprocal square root, fast tier.
#[inline]
pub fn rsqrt_fast(x: i32) -> i32 {
    rsqrt_nr(x, 2, "rsqrt_fast")
}

/// Reciprocal square root, fastest tier.
#[inline]
pub fn rsqrt_fastest(x: i32) -> i32 {
    rsqrt_nr(x, 1, "rsqrt_fastest")
}

// ── Exponentials and logarithms ─────────────────────────────────────────

/// 2^x for a (possibly widened) Q16.16 exponent: integer part by shift,
/// fractional part by the 1/k! series on f·ln2 ∈ [0, ln 2).
fn exp2_q16(x: i64, coeffs: &[i64]) -> i32 {
    let ipart = x >> SHIFT;
    if ipart >= 15 {
        return i32::MAX; // result exceeds the representable range
    }
    if ipart < -40 {
        return 0;
    }
    let f = (x & (ONE as i64 - 1)) << 14; // Q30 fraction in [0, 1)
    let y = (f * LN2_Q30) >> 30;
    let mut acc = coeffs[coeffs.len() - 1];
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] + ((acc * y) >> 30);
    }
    rshift_round(acc, (14 - ipart) as u32) as i32
}

/// Base-2 exponential, precise tier. Saturates at `i32::MAX` when the
/// result exceeds the format, underflows to 0.
#[inline]
pub fn exp2(x: i32) -> i32 {
    exp2_q16(x as i64, &consts::EXP32_PRECISE)
}

#[inline]
pub fn exp2_fast(x: i32) -> i32 {
    exp2_q16(x as i64, &consts::EXP32_FAST)
}

#[inline]
pub fn exp2_fastest(x: i32) -> i32 {
    exp2_q16(x as i64, &consts::EXP32_FASTEST)
}

#[inline]
fn exp_scaled(x: i32, coeffs: &[i64]) -> i32 {
    // e^x = 2^(x·log2 e); scale in Q48 so the constant multiply costs no
    // precision at this width.
    let t = (((x as i128) * LOG2E_Q48) >> 48) as i64;
    exp2_q16(t, coeffs)
}

/// Natural exponential, precise tier.
#[inline]
pub fn exp(x: i32) -> i32 {
    exp_scaled(x, &consts::EXP32_PRECISE)
}

#[inline]
pub fn exp_fast(x: i32) -> i32 {
    exp_scaled(x, &consts::EXP32_FAST)
}

#[inline]
pub fn exp_fastest(x: i32) -> i32 {
    exp_scaled(x, &consts::EXP32_FASTEST)
}

enum LogTier {
    Precise,
    Series(&'static [i64]),
}

/// log2 of a positive raw in Q30. Precise tier extracts mantissa bits by
/// repeated squaring (exact, fixed 26 iterations); series tiers evaluate
/// the atanh expansion of ln m around u = (m-1)/(m+1).
fn log2_q30(x: i32, tier: &LogTier) -> i64 {
    let (mut m, p) = normalize(x);
    let mantissa = match tier {
        LogTier::Precise => {
            let mut bits: i64 = 0;
            let mut i = 0;
            while i < 26 {
                m = (m * m) >> 30;
                bits <<= 1;
                if m >= (2 << 30) {
                    m >>= 1;
                    bits |= 1;
                }
                i += 1;
            }
            bits << 4 // Q26 → Q30
        }
        LogTier::Series(coeffs) => {
            let u = ((m - ONE_Q30) << 30) / (m + ONE_Q30); // [0, 1/3)
            let u2 = (u * u) >> 30;
            let mut acc = coeffs[coeffs.len() - 1];
            let mut i = coeffs.len() - 1;
            while i > 0 {
                i -= 1;
                acc = coeffs[i] + ((acc * u2) >> 30);
            }
            let s = (acc * u) >> 30; // atanh(u) = ln(m)/2, Q30
            (s * LOG2E_Q32) >> 31 // ·2·log2 e
        }
    };
    ((p as i64) << 30) + mantissa
}

fn log2_tiered(x: i32, tier: &LogTier, name: &str) -> i32 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    rshift_round(log2_q30(x, tier), 14) as i32
}

/// Base-2 logarithm, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn log2(x: i32) -> i32 {
    log2_tiered(x, &LogTier::Precise, "log2")
}

#[inline]
pub fn log2_fast(x: i32) -> i32 {
    log2_tiered(x, &LogTier::Series(&consts::LOG32_FAST), "log2_fast")
}

#[inline]
pub fn log2_fastest(x: i32) -> i32 {
    log2_tiered(x, &LogTier::Series(&consts::LOG32_FASTEST), "log2_fastest")
}

fn log_tiered(x: i32, tier: &LogTier, name: &str) -> i32 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let l = log2_q30(x, tier);
    let n = ((l as i128 * LN2_Q32 as i128) >> 32) as i64;
    rshift_round(n, 14) as i32
}

/// Natural logarithm, precise tier. Domain error for x ≤ 0.
#[inline]
pub fn log(x: i32) -> i32 {
    log_tiered(x, &LogTier::Precise, "log")
}

#[inline]
pub fn log_fast(x: i32) -> i32 {
    log_tiered(x, &LogTier::Series(&consts::LOG32_FAST), "log_fast")
}

#[inline]
pub fn log_fastest(x: i32) -> i32 {
    log_tiered(x, &LogTier::Series(&consts::LOG32_FASTEST), "log_fastest")
}

fn pow_tiered(x: i32, e: i32, log_tier: &LogTier, exp_coeffs: &[i64], name: &str) -> i32 {
    if x <= 0 {
        domain_error!(name, "x", x);
    }
    let l = log2_q30(x, log_tier); // Q30
    let t = (((e as i128) * (l as i128)) >> 30) as i64; // Q16 exponent
    exp2_q16(t, exp_coeffs)
}

/// x^e = 2^(e·log2 x), precise tier. Domain error for x ≤ 0.
#[inline]
pub fn pow(x: i32, e: i32) -> i32 {
    pow_tiered(x, e, &LogTier::Precise, &consts::EXP32_PRECISE, "pow")
}

#[inline]
pub fn pow_fast(x: i32, e: i32) -> i32 {
    pow_tiered(
        x,
        e,
        &LogTier::Series(&consts::LOG32_FAST),
        &consts::EXP32_FAST,
        "pow_fast",
    )
}

#[inline]
pub fn pow_fastest(x: i32, e: i32) -> i32 {
    pow_tiered(
        x,
        e,
        &LogTier::Series(&consts::LOG32_FASTEST),
        &consts::EXP32_FASTEST,
        "pow_fastest",
    )
}

// ── Trigonometry ────────────────────────────────────────────────────────

/// Sine via the wrapping turn phase: multiply by 1/(2π) into a Q32 phase
/// (wraps mod one turn by construction), reinterpret as a signed Q30
/// quadrant variable, mirror quadrants 2 and 3 onto [-1, 1] (the
/// XOR-of-shifted-sign test), evaluate the odd polynomial of sin(π/2·z).
fn sin_poly(x: i32, coeffs: &[i64]) -> i32 {
    let phase = (((x as i64) * RCP_TWO_PI_Q32) >> SHIFT) as u32;
    let s = phase as i32;
    let z: i64 = if (s ^ (s << 1)) < 0 {
        if s >= 0 {
            (1i64 << 31) - s as i64
        } else {
            -(1i64 << 31) - s as i64
        }
    } else {
        s as i64
    };
    let w = (z * z) >> 30;
    let mut acc = coeffs[coeffs.len() - 1];
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] + ((acc * w) >> 30);
    }
    rshift_round((acc * z) >> 30, 14) as i32
}

/// Sine, precise tier (degree-11 polynomial).
#[inline]
pub fn sin(x: i32) -> i32 {
    sin_poly(x, &consts::SIN32_PRECISE)
}

#[inline]
pub fn sin_fast(x: i32) -> i32 {
    sin_poly(x, &consts::SIN32_FAST)
}

#[inline]
pub fn sin_fastest(x: i32) -> i32 {
    sin_poly(x, &consts::SIN32_FASTEST)
}

/// Cosine: sin(x + π/2), exactly, by construction.
#[inline]
pub fn cos(x: i32) -> i32 {
    sin(x.wrapping_add(HALF_PI))
}

#[inline]
pub fn cos_fast(x: i32) -> i32 {
    sin_fast(x.wrapping_add(HALF_PI))
}

#[inline]
pub fn cos_fastest(x: i32) -> i32 {
    sin_fastest(x.wrapping_add(HALF_PI))
}

/// Tangent: sin/cos via exact division. Domain error where cos(x) = 0.
pub fn tan(x: i32) -> i32 {
    let c = cos(x);
    if c == 0 {
        domain_error!("tan", "x", x);
    }
    div_precise(sin(x), c)
}

pub fn tan_fast(x: i32) -> i32 {
    let c = cos_fast(x);
    if c == 0 {
        domain_error!("tan_fast", "x", x);
    }
    div_precise(sin_fast(x), c)
}

pub fn tan_fastest(x: i32) -> i32 {
    let c = cos_fastest(x);
    if c == 0 {
        domain_error!("tan_fastest", "x", x);
    }
    div_precise(sin_fastest(x), c)
}

/// Odd atan series in Q30, |k| ≤ 1.
fn atan_poly(k: i64, coeffs: &[i64]) -> i64 {
    let w = (k * k) >> 30;
    let mut acc = coeffs[coeffs.len() - 1];
    let mut i = coeffs.len() - 1;
    while i > 0 {
        i -= 1;
        acc = coeffs[i] + ((acc * w) >> 30);
    }
    (acc * k) >> 30
}

/// Quadrant-corrected arctangent of y/x. The smaller magnitude is divided
/// by the larger (exactly, in Q30); arguments above tan(π/8) are reduced
/// through atan(k) = π/4 + atan((k-1)/(k+1)); octant corrections then
/// reapply which operand dominated and both signs. atan2(0, 0) = 0.
fn atan2_tiered(y: i32, x: i32, coeffs: &[i64]) -> i32 {
    if y == 0 && x == 0 {
        return 0;
    }
    let ay = (y as i64).abs();
    let ax = (x as i64).abs();
    let (num, den) = if ay <= ax { (ay, ax) } else { (ax, ay) };
    let k = (num << 30) / den;
    let base = if k > TAN_PI_8_Q30 {
        let kr = ((k - ONE_Q30) << 30) / (k + ONE_Q30);
        QUARTER_PI_Q30 + atan_poly(kr, coeffs)
    } else {
        atan_poly(k, coeffs)
    };
    let mut ang = base;
    if ay > ax {
        ang = HALF_PI_Q30 - ang;
    }
    if x < 0 {
        ang = PI_Q30 - ang;
    }
    if y < 0 {
        ang = -ang;
    }
    rshift_round(ang, 14) as i32
}

/// Arctangent of y/x with full octant correction, precise tier.
#[inline]
pub fn atan2(y: i32, x: i32) -> i32 {
    atan2_tiered(y, x, &consts::ATAN32_PRECISE)
}

#[inline]
pub fn atan2_fast(y: i32, x: i32) -> i32 {
    atan2_tiered(y, x, &consts::ATAN32_FAST)
}

#[inline]
pub fn atan2_fastest(y: i32, x: i32) -> i32 {
    atan2_tiered(y, x, &consts::ATAN32_FASTEST)
}

/// asin/acos run in the 64-bit family to keep the intermediate
/// (1+x)(1-x) and its square root at full precision, then narrow.
fn asin_acos64(x: i32, name: &str) -> (i64, i64) {
    if !(-ONE..=ONE).contains(&x) {
        #[cfg(feature = "safety-checks")]
        panic!("{}: argument `x` out of domain (raw {})", name, x);
        #[cfg(not(feature = "safety-checks"))]
        {
            let _ = name;
            return (0, 0);
        }
    }
    let x64 = (x as i64) << SHIFT;
    let one64 = 1i64 << 32;
    let t = math64::mul(one64 + x64, one64 - x64);
    let s = math64::sqrt_precise(t);
    (x64, s)
}

/// Arcsine, precise tier. Domain error for |x| > 1.
pub fn asin(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "asin");
    if x64 == 0 && s == 0 {
        return 0;
    }
    rshift_round(math64::atan2(x64, s) as i64, SHIFT) as i32
}

pub fn asin_fast(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "asin_fast");
    if x64 == 0 && s == 0 {
        return 0;
    }
    rshift_round(math64::atan2_fast(x64, s) as i64, SHIFT) as i32
}

pub fn asin_fastest(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "asin_fastest");
    if x64 == 0 && s == 0 {
        return 0;
    }
    rshift_round(math64::atan2_fastest(x64, s) as i64, SHIFT) as i32
}

/// Arccosine, precise tier: the complement atan2(√(1-x²), x) ∈ [0, π].
pub fn acos(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "acos");
    if x64 == 0 && s == 0 && x != 0 {
        return 0;
    }
    rshift_round(math64::atan2(s, x64) as i64, SHIFT) as i32
}

pub fn acos_fast(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "acos_fast");
    if x64 == 0 && s == 0 && x != 0 {
        return 0;
    }
    rshift_round(math64::atan2_fast(s, x64) as i64, SHIFT) as i32
}

pub fn acos_fastest(x: i32) -> i32 {
    let (x64, s) = asin_acos64(x, "acos_fastest");
    if x64 == 0 && s == 0 && x != 0 {
        return 0;
    }
    rshift_round(math64::atan2_fastest(s, x64) as i64, SHIFT) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int_and_back() {
        assert_eq!(from_int(3), 196608);
        assert_eq!(floor_to_int(from_int(3)), 3);
        assert_eq!(from_int(-7), -458752);
        assert_eq!(floor_to_int(from_int(-7)), -7);
    }

    #[test]
    fn test_rounding_ties_toward_positive_infinity() {
        let pos_half = from_int(1) + HALF; // 1.5
        let neg_half = from_int(-2) + HALF; // -1.5
        assert_eq!(round_to_int(pos_half), 2);
        assert_eq!(round_to_int(neg_half), -1);
        assert_eq!(floor_to_int(neg_half), -2);
        assert_eq!(ceil_to_int(neg_half), -1);
    }

    #[test]
    fn test_mul_exact() {
        // 1.5 · 2.5 = 3.75
        assert_eq!(mul(98304, 163840), 245760);
        // (-1.5) · 2 = -3
        assert_eq!(mul(-98304, from_int(2)), from_int(-3));
    }

    #[test]
    fn test_div_precise_exact() {
        assert_eq!(div_precise(from_int(3), from_int(2)), 98304);
        assert_eq!(div_precise(from_int(-3), from_int(2)), -98304);
        assert_eq!(div_precise(from_int(1), from_int(3)), 21845);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(sub(i32::MIN, 1), i32::MAX);
    }

    #[test]
    fn test_sqrt_precise_exact() {
        assert_eq!(sqrt_precise(from_int(4)), from_int(2));
        assert_eq!(sqrt_precise(from_int(2)), 92681); // floor(√2 · 2^16)
        assert_eq!(sqrt_precise(0), 0);
    }

    #[test]
    fn test_exp2_integer_powers_exact() {
        assert_eq!(exp2(0), ONE);
        assert_eq!(exp2(from_int(3)), from_int(8));
        assert_eq!(exp2(from_int(-2)), ONE / 4);
        assert_eq!(log2(from_int(8)), from_int(3));
        assert_eq!(log2(ONE), 0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(PI, 205887);
        assert_eq!(HALF_PI, 102944);
        assert_eq!(TWO_PI, 411775);
    }
}
