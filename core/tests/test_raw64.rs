//! Q32.32 raw kernel tests
//!
//! Mirror of `test_raw32` for `raw::math64`. The wide kernel shares the
//! algorithm shapes but carries its own independently derived coefficient
//! tables, so every family is exercised again at the wide precision. The
//! f64 oracle only carries ~53 bits, so oracle tolerances here are looser
//! relative to the format than in the narrow tests; exact cases do the
//! heavy lifting.

use fixmath_core_rs::raw::math64 as m;

fn ulps(a: i64, b: i64) -> i64 {
    (a - b).abs()
}

fn assert_close_f64(actual: i64, expected: f64, tol_raw: i64, what: &str) {
    let expected_raw = (expected * 4294967296.0).round() as i64;
    let err = (actual - expected_raw).abs();
    assert!(
        err <= tol_raw,
        "{}: raw {} vs oracle {} (err {} raw)",
        what,
        actual,
        expected_raw,
        err
    );
}

// ==================== Conversions and rounding ====================

#[test]
fn test_int_conversions() {
    assert_eq!(m::from_int(7), 7i64 << 32);
    assert_eq!(m::round_to_int(m::from_int(1) + m::HALF), 2);
    assert_eq!(m::round_to_int(-m::from_int(2) + m::HALF), -1);
    assert_eq!(m::ceil_to_int(m::from_int(3) + 1), 4);
}

#[test]
fn test_wrapping() {
    assert_eq!(m::add(i64::MAX, 1), i64::MIN);
    assert_eq!(m::sub(i64::MIN, 1), i64::MAX);
}

#[test]
fn test_constants_against_oracle() {
    assert_close_f64(m::PI, std::f64::consts::PI, 1, "PI");
    assert_close_f64(m::TWO_PI, std::f64::consts::TAU, 1, "TWO_PI");
    assert_close_f64(m::HALF_PI, std::f64::consts::FRAC_PI_2, 1, "HALF_PI");
    assert_close_f64(m::E, std::f64::consts::E, 1, "E");
    assert_close_f64(m::LN2, std::f64::consts::LN_2, 1, "LN2");
}

// ==================== Multiplication and division ====================

#[test]
fn test_mul_exact() {
    let three_halves = m::ONE + m::HALF;
    assert_eq!(m::mul(three_halves, m::from_int(4)), m::from_int(6));
    assert_eq!(m::mul(-three_halves, m::from_int(4)), -m::from_int(6));
}

#[test]
fn test_div_precise_exact() {
    assert_eq!(m::div_precise(m::from_int(3), m::from_int(2)), m::ONE + m::HALF);
    assert_eq!(m::div_precise(m::ONE, m::from_int(3)), 1431655765);
}

#[test]
fn test_div_tiers_track_precise() {
    let samples: [(i64, i64); 5] = [
        (m::from_int(1), m::from_int(3)),
        (m::from_int(1_000_000), m::from_int(7)),
        (m::from_int(-55) + 999_999, m::from_int(13)),
        (m::HALF, -m::from_int(9) + 12345),
        (1 << 20, m::from_int(100_000)),
    ];
    for &(a, b) in &samples {
        let precise = m::div_precise(a, b);
        let p = precise.abs();
        // 4 Newton steps carry ~2^-34 relative error at this width.
        assert!(ulps(m::div(a, b), precise) <= 2 + (p >> 33), "div({}, {})", a, b);
        assert!(ulps(m::div_fast(a, b), precise) <= 2 + (p >> 14), "div_fast({}, {})", a, b);
        assert!(ulps(m::div_fastest(a, b), precise) <= 2 + (p >> 10), "div_fastest({}, {})", a, b);
    }
}

// ==================== Square roots ====================

#[test]
fn test_sqrt_precise_exact() {
    assert_eq!(m::sqrt_precise(m::from_int(4)), m::from_int(2));
    assert_eq!(m::sqrt_precise(m::from_int(1 << 20)), m::from_int(1 << 10));
    // floor(sqrt(2) * 2^32) = floor(6074000999.578...)
    assert_eq!(m::sqrt_precise(m::from_int(2)), 6074000999);
}

#[test]
fn test_sqrt_tiers_track_precise() {
    for &x in &[1i64, m::HALF, m::ONE, m::from_int(2), m::from_int(12345) + 999, m::from_int(1 << 30)] {
        let precise = m::sqrt_precise(x);
        assert!(ulps(m::sqrt(x), precise) <= 2 + (precise >> 33), "sqrt({})", x);
        assert!(ulps(m::sqrt_fast(x), precise) <= 2 + (precise >> 17), "sqrt_fast({})", x);
        assert!(ulps(m::sqrt_fastest(x), precise) <= 2 + (precise >> 9), "sqrt_fastest({})", x);
    }
}

#[test]
fn test_rsqrt_inverse_law() {
    for &x in &[m::HALF, m::ONE, m::from_int(2), m::from_int(10_000)] {
        let prod = m::mul(m::rsqrt(x), m::sqrt(x));
        // The rsqrt quantization error scales by sqrt(x) in the product.
        let tol = 4 + (m::sqrt_precise(x) >> 31);
        assert!(ulps(prod, m::ONE) <= tol, "rsqrt*sqrt at {} gave {}", x, prod);
    }
}

// ==================== Exponentials and logarithms ====================

#[test]
fn test_exp2_integer_powers_exact() {
    assert_eq!(m::exp2(0), m::ONE);
    assert_eq!(m::exp2(m::from_int(10)), m::from_int(1024));
    assert_eq!(m::exp2(m::from_int(30)), m::from_int(1 << 30));
    assert_eq!(m::exp2(-m::from_int(3)), m::ONE / 8);
}

#[test]
fn test_exp2_saturates() {
    assert_eq!(m::exp2(m::from_int(31)), i64::MAX);
    assert_eq!(m::exp2(i64::MAX), i64::MAX);
    assert_eq!(m::exp2(m::from_int(-90)), 0);
}

#[test]
fn test_log2_integer_powers_exact() {
    assert_eq!(m::log2(m::ONE), 0);
    assert_eq!(m::log2(m::from_int(1 << 20)), m::from_int(20));
    assert_eq!(m::log2(m::ONE / 1024), -m::from_int(10));
}

#[test]
fn test_log2_monotonic() {
    let mut prev = m::log2(m::HALF);
    let mut x = m::HALF + (1 << 26);
    while x < m::from_int(20) {
        let cur = m::log2(x);
        assert!(cur >= prev, "log2 not monotonic at {}", x);
        prev = cur;
        x += 1 << 26;
    }
}

#[test]
fn test_exp_log_inverse() {
    for &x in &[m::HALF, m::ONE, m::from_int(3) + 777_777, m::from_int(500)] {
        let back = m::exp(m::log(x));
        // log precise mantissa carries 36 bits.
        let tol = 16 + (x >> 33);
        assert!(ulps(back, x) <= tol, "exp(log({})) = {}", x, back);
    }
}

#[test]
fn test_pow_identities() {
    for &x in &[m::HALF, m::ONE, m::from_int(2), m::from_int(7) + 999_999] {
        let tol = 16 + (x >> 30);
        assert!(ulps(m::pow(x, m::ONE), x) <= tol, "pow({}, 1)", x);
        assert_eq!(m::pow(x, 0), m::ONE);
    }
    assert!(ulps(m::pow(m::from_int(3), m::from_int(2)), m::from_int(9)) <= 1 << 12);
}

#[test]
fn test_exp_oracle() {
    for &x in &[-m::from_int(2), -m::HALF, m::HALF, m::ONE, m::from_int(3)] {
        let oracle = m::to_f64(x).exp();
        let tol = 64 + (oracle * 4294967296.0 / (1u64 << 33) as f64) as i64;
        assert_close_f64(m::exp(x), oracle, tol, "exp");
    }
}

// ==================== Trigonometry ====================

#[test]
fn test_sin_key_points() {
    assert_eq!(m::sin(0), 0);
    assert!(ulps(m::sin(m::HALF_PI), m::ONE) <= 4);
    assert!(ulps(m::sin(m::PI), 0) <= 4);
    assert!(ulps(m::sin(-m::HALF_PI), -m::ONE) <= 4);
}

#[test]
fn test_sin_oracle_sweep() {
    // The f64 oracle itself is only good to ~2^-52 relative, comfortably
    // inside these tolerances.
    let mut x = -m::from_int(7);
    while x < m::from_int(7) {
        assert_close_f64(m::sin(x), m::to_f64(x).sin(), 32, "sin");
        assert_close_f64(m::sin_fast(x), m::to_f64(x).sin(), 256, "sin_fast");
        assert_close_f64(m::sin_fastest(x), m::to_f64(x).sin(), 1 << 18, "sin_fastest");
        x += 87_654_321;
    }
}

#[test]
fn test_cos_is_shifted_sin() {
    for &x in &[0, 777_777_777, -m::from_int(3), m::from_int(1000)] {
        assert_eq!(m::cos(x), m::sin(m::add(x, m::HALF_PI)));
    }
}

#[test]
fn test_sin_periodicity_and_symmetry() {
    for &x in &[123_456_789, m::HALF, m::from_int(2) + 55] {
        assert!(ulps(m::sin(m::add(x, m::TWO_PI)), m::sin(x)) <= 8);
        assert!(ulps(m::sin(-x), -m::sin(x)) <= 8);
    }
}

#[test]
fn test_atan2_axis_cases() {
    assert_eq!(m::atan2(0, 0), 0);
    assert_eq!(m::atan2(0, m::ONE), 0);
    assert!(ulps(m::atan2(m::ONE, 0), m::HALF_PI) <= 1);
    assert!(ulps(m::atan2(0, -m::ONE), m::PI) <= 1);
    assert!(ulps(m::atan2(-m::ONE, 0), -m::HALF_PI) <= 1);
}

#[test]
fn test_atan2_oracle() {
    let pts: [(i64, i64); 5] = [
        (m::ONE, m::ONE),
        (m::from_int(3), m::from_int(-4)),
        (-m::from_int(2), m::from_int(5)),
        (m::from_int(1000), m::ONE),
        (1 << 10, m::from_int(100)),
    ];
    for &(y, x) in &pts {
        let oracle = m::to_f64(y).atan2(m::to_f64(x));
        assert_close_f64(m::atan2(y, x), oracle, 32, "atan2");
        assert_close_f64(m::atan2_fast(y, x), oracle, 1 << 12, "atan2_fast");
    }
}

#[test]
fn test_tan_asin_acos() {
    assert_close_f64(m::tan(m::HALF), m::to_f64(m::HALF).tan(), 64, "tan");
    assert_eq!(m::asin(0), 0);
    assert_eq!(m::acos(m::ONE), 0);
    assert!(ulps(m::asin(m::ONE), m::HALF_PI) <= 4);
    assert!(ulps(m::acos(-m::ONE), m::PI) <= 4);
    for &x in &[-m::HALF, m::HALF, m::ONE / 3] {
        assert_close_f64(m::asin(x), m::to_f64(x).asin(), 64, "asin");
        assert_close_f64(m::acos(x), m::to_f64(x).acos(), 64, "acos");
    }
}

// ==================== Silent domain errors (default feature set) ====================

#[cfg(not(feature = "safety-checks"))]
#[test]
fn test_domain_errors_return_zero() {
    assert_eq!(m::div_precise(m::ONE, 0), 0);
    assert_eq!(m::sqrt_precise(-m::ONE), 0);
    assert_eq!(m::rsqrt(-m::ONE), 0);
    assert_eq!(m::log2(0), 0);
    assert_eq!(m::pow(0, m::ONE), 0);
    assert_eq!(m::acos(m::from_int(2)), 0);
}
