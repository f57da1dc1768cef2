//! Compile-time constant and coefficient tables
//!
//! Everything the transcendental kernels need (√2, π, ln 2, log2 e, 1/(2π)
//! and every polynomial coefficient table) is produced here at compile time
//! by exact integer arithmetic, so there is no hand-typed decimal constant
//! that could silently disagree between the 32-bit and 64-bit kernels.
//!
//! The anchor constants (π, ln 2, log2 e, 1/(2π), e) are 64-fractional-bit
//! integers taken from their well-known hexadecimal expansions. Every other
//! constant is derived from those by const evaluation: √2 by the
//! digit-by-digit integer square root, the sine coefficients
//! (π/2)^(2k+1)/(2k+1)! by iterated fixed-point multiplication, the
//! exponential coefficients 1/k! and the atan/log series coefficients
//! 1/(2k+1) by exact integer division.
//!
//! All tables are immutable after compilation and read concurrently without
//! synchronization.

/// π with 64 fractional bits (`floor(π · 2^64)`).
pub const PI_Q64: u128 = 0x3243F6A8885A308D3;

/// ln 2 with 64 fractional bits, rounded to nearest.
pub const LN2_Q64: u128 = 0xB17217F7D1CF79AC;

/// log2 e with 64 fractional bits (`floor(log2(e) · 2^64)`).
pub const LOG2E_Q64: u128 = 0x171547652B82FE177;

/// 1/(2π) with 64 fractional bits (`floor(2^64 / 2π)`).
pub const RCP_TWO_PI_Q64: u128 = 0x28BE60DB9391054A;

/// Euler's number with 64 fractional bits, rounded to nearest.
pub const E_Q64: u128 = 0x2B7E151628AED2A6B;

/// Round a Q64-and-wider constant down to `64 - shift` fractional bits,
/// rounding to nearest (ties away from zero are impossible here because the
/// inputs are positive).
pub const fn round_shift(v: u128, shift: u32) -> u128 {
    ((v >> (shift - 1)) + 1) >> 1
}

/// Integer square root of a `u128`, digit-by-digit.
///
/// Exact: returns `floor(sqrt(v))`. The loop runs a fixed 64 iterations
/// (half the bit width), independent of the input value.
pub const fn isqrt_u128(v: u128) -> u128 {
    let mut rem = v;
    let mut root: u128 = 0;
    let mut bit: u128 = 1 << 126;
    while bit > rem {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// √2 with 62 fractional bits: `isqrt(2 · 2^124)`.
pub const SQRT2_Q62: u128 = isqrt_u128(2u128 << 124);

/// 1/√2 = √2/2 with 62 fractional bits.
pub const RSQRT2_Q62: u128 = SQRT2_Q62 >> 1;

/// tan(π/8) = √2 − 1 with 62 fractional bits. Split point for the atan
/// argument reduction; only needs to sit between the two series' domains,
/// so the 1-ULP floor error of `SQRT2_Q62` is irrelevant.
pub const TAN_PI_8_Q62: u128 = SQRT2_Q62 - (1 << 62);

/// Sine series coefficients `(-1)^k (π/2)^(2k+1) / (2k+1)!` in Q62,
/// low order first. `sin(π/2·z) = Σ coeff[k] · z^(2k+1)` for z ∈ [-1, 1].
pub const fn sin_coeffs_q62<const N: usize>() -> [i64; N] {
    let half_pi: u128 = PI_Q64 >> 3; // π/2 in Q62
    let half_pi_sq: u128 = (half_pi * half_pi) >> 62;
    let mut out = [0i64; N];
    let mut c: u128 = half_pi;
    let mut k: usize = 0;
    loop {
        out[k] = if k % 2 == 1 { -(c as i64) } else { c as i64 };
        k += 1;
        if k == N {
            break;
        }
        let n = (2 * k) as u128;
        c = ((c * half_pi_sq) >> 62) / (n * (n + 1));
    }
    out
}

/// Exponential series coefficients `1/k!` in Q62, low order first
/// (index 0 is the constant term 1).
pub const fn exp_coeffs_q62<const N: usize>() -> [i64; N] {
    let mut out = [0i64; N];
    let mut fact: u128 = 1;
    let mut k: usize = 0;
    while k < N {
        if k > 0 {
            fact *= k as u128;
        }
        out[k] = ((1u128 << 62) / fact) as i64;
        k += 1;
    }
    out
}

/// atanh series coefficients `1/(2k+1)` in Q62, low order first.
/// `ln(m) = 2 Σ coeff[k] · u^(2k+1)` with `u = (m-1)/(m+1)`.
pub const fn atanh_coeffs_q62<const N: usize>() -> [i64; N] {
    let mut out = [0i64; N];
    let mut k: usize = 0;
    while k < N {
        out[k] = ((1u128 << 62) / (2 * k as u128 + 1)) as i64;
        k += 1;
    }
    out
}

/// atan series coefficients `(-1)^k / (2k+1)` in Q62, low order first.
pub const fn atan_coeffs_q62<const N: usize>() -> [i64; N] {
    let mut out = [0i64; N];
    let mut k: usize = 0;
    while k < N {
        let c = ((1u128 << 62) / (2 * k as u128 + 1)) as i64;
        out[k] = if k % 2 == 1 { -c } else { c };
        k += 1;
    }
    out
}

/// Downscale a Q62 coefficient table to Q30 (for the 32-bit kernel's i64
/// internal precision), rounding each entry to nearest.
pub const fn table_q30<const N: usize>(src: [i64; N]) -> [i64; N] {
    let mut out = [0i64; N];
    let mut k: usize = 0;
    while k < N {
        out[k] = ((src[k] >> 31) + 1) >> 1;
        k += 1;
    }
    out
}

// ── 32-bit kernel tables (Q30) ──────────────────────────────────────────

pub const SIN32_PRECISE: [i64; 6] = table_q30(sin_coeffs_q62::<6>());
pub const SIN32_FAST: [i64; 5] = table_q30(sin_coeffs_q62::<5>());
pub const SIN32_FASTEST: [i64; 4] = table_q30(sin_coeffs_q62::<4>());

pub const EXP32_PRECISE: [i64; 8] = table_q30(exp_coeffs_q62::<8>());
pub const EXP32_FAST: [i64; 6] = table_q30(exp_coeffs_q62::<6>());
pub const EXP32_FASTEST: [i64; 5] = table_q30(exp_coeffs_q62::<5>());

pub const LOG32_FAST: [i64; 4] = table_q30(atanh_coeffs_q62::<4>());
pub const LOG32_FASTEST: [i64; 3] = table_q30(atanh_coeffs_q62::<3>());

pub const ATAN32_PRECISE: [i64; 7] = table_q30(atan_coeffs_q62::<7>());
pub const ATAN32_FAST: [i64; 5] = table_q30(atan_coeffs_q62::<5>());
pub const ATAN32_FASTEST: [i64; 4] = table_q30(atan_coeffs_q62::<4>());

// ── 64-bit kernel tables (Q62) ──────────────────────────────────────────

pub const SIN64_PRECISE: [i64; 8] = sin_coeffs_q62::<8>();
pub const SIN64_FAST: [i64; 7] = sin_coeffs_q62::<7>();
pub const SIN64_FASTEST: [i64; 5] = sin_coeffs_q62::<5>();

pub const EXP64_PRECISE: [i64; 13] = exp_coeffs_q62::<13>();
pub const EXP64_FAST: [i64; 9] = exp_coeffs_q62::<9>();
pub const EXP64_FASTEST: [i64; 7] = exp_coeffs_q62::<7>();

pub const LOG64_FAST: [i64; 10] = atanh_coeffs_q62::<10>();
pub const LOG64_FASTEST: [i64; 5] = atanh_coeffs_q62::<5>();

pub const ATAN64_PRECISE: [i64; 12] = atan_coeffs_q62::<12>();
pub const ATAN64_FAST: [i64; 8] = atan_coeffs_q62::<8>();
pub const ATAN64_FASTEST: [i64; 5] = atan_coeffs_q62::<5>();

// ── Reciprocal seed constants (48/17 − 32/17·d, d ∈ [0.5, 1)) ───────────

pub const RCP_SEED_A_Q30: i64 = ((48u128 << 30) / 17) as i64;
pub const RCP_SEED_B_Q30: i64 = ((32u128 << 30) / 17) as i64;
pub const RCP_SEED_A_Q62: i128 = ((48u128 << 62) / 17) as i128;
pub const RCP_SEED_B_Q62: i128 = ((32u128 << 62) / 17) as i128;

// ── Reciprocal-sqrt seed constants (A − B·m, m ∈ [1, 2)) ────────────────
//
// B = 1 − 1/√2 (the chord slope magnitude), A = 1 + B − ε where ε shifts
// the chord halfway toward the curve to halve the worst-case error.
// ε ≈ 0.0189 in Q62; the seed only needs |err| ≤ 0.02 before refinement.

const RSQRT_SEED_EPS_Q62: u128 = (1u128 << 62) / 53; // ≈ 0.01887

pub const RSQRT_SEED_B_Q62: i128 = ((1u128 << 62) - RSQRT2_Q62) as i128;
pub const RSQRT_SEED_A_Q62: i128 =
    ((1u128 << 62) + ((1u128 << 62) - RSQRT2_Q62) - RSQRT_SEED_EPS_Q62) as i128;
pub const RSQRT_SEED_B_Q30: i64 = (RSQRT_SEED_B_Q62 >> 32) as i64;
pub const RSQRT_SEED_A_Q30: i64 = (RSQRT_SEED_A_Q62 >> 32) as i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_exact_squares() {
        assert_eq!(isqrt_u128(0), 0);
        assert_eq!(isqrt_u128(1), 1);
        assert_eq!(isqrt_u128(4), 2);
        assert_eq!(isqrt_u128(15), 3);
        assert_eq!(isqrt_u128(16), 4);
        assert_eq!(isqrt_u128(1u128 << 100), 1u128 << 50);
        let big = (1u128 << 63) - 1;
        let r = isqrt_u128(big * big);
        assert_eq!(r, big);
    }

    #[test]
    fn test_sqrt2_value() {
        // √2 · 2^62, checked against the f64 value within a few ULP of f64.
        let got = SQRT2_Q62 as f64 / (1u64 << 62) as f64;
        assert!((got - std::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn test_anchor_constants() {
        let q64 = 18446744073709551616.0f64; // 2^64
        assert!((PI_Q64 as f64 / q64 - std::f64::consts::PI).abs() < 1e-12);
        assert!((LN2_Q64 as f64 / q64 - std::f64::consts::LN_2).abs() < 1e-12);
        assert!((LOG2E_Q64 as f64 / q64 - std::f64::consts::LOG2_E).abs() < 1e-12);
        assert!((RCP_TWO_PI_Q64 as f64 / q64 - 1.0 / std::f64::consts::TAU).abs() < 1e-12);
        assert!((E_Q64 as f64 / q64 - std::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn test_sin_coefficients_match_series() {
        let q62 = (1u64 << 62) as f64;
        let hp = std::f64::consts::FRAC_PI_2;
        let mut expect = hp; // (π/2)^1 / 1!
        let table = SIN64_PRECISE;
        let mut fact = 1.0f64;
        for (k, &c) in table.iter().enumerate() {
            if k > 0 {
                let n = 2.0 * k as f64;
                fact *= n * (n + 1.0);
                expect *= hp * hp;
            }
            let want = expect / fact * if k % 2 == 1 { -1.0 } else { 1.0 };
            let got = c as f64 / q62;
            assert!(
                (got - want).abs() < 1e-9,
                "sin coeff {} mismatch: {} vs {}",
                k,
                got,
                want
            );
        }
    }

    #[test]
    fn test_exp_coefficients_match_series() {
        let q62 = (1u64 << 62) as f64;
        let mut fact = 1.0f64;
        for (k, &c) in EXP64_PRECISE.iter().enumerate() {
            if k > 0 {
                fact *= k as f64;
            }
            assert!((c as f64 / q62 - 1.0 / fact).abs() < 1e-12);
        }
    }
}
