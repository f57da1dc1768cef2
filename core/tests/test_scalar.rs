//! Scalar wrapper tests
//!
//! `Fixed32`/`Fixed64` surface: operator traits, ordering, display,
//! serde transparency, checked constructors, and the widening/narrowing
//! bridges. Kernel numerics are covered by `test_raw32`/`test_raw64`; here
//! we only verify the wrappers forward faithfully.

use fixmath_core_rs::{Fixed32, Fixed64, FixedError};

// ==================== Construction ====================

#[test]
fn test_ratio_exact() {
    assert_eq!(Fixed32::ratio(1, 2), Fixed32::HALF);
    assert_eq!(Fixed32::ratio(-3, 2).raw(), -98304);
    assert_eq!(Fixed64::ratio(1, 4).raw(), 1i64 << 30);
}

#[test]
fn test_checked_ratio() {
    assert_eq!(Fixed32::checked_ratio(5, 0), Err(FixedError::ZeroDenominator));
    assert_eq!(Fixed64::checked_ratio(5, 0), Err(FixedError::ZeroDenominator));
    assert_eq!(Fixed32::checked_ratio(5, 2), Ok(Fixed32::from_int(2) + Fixed32::HALF));
}

#[test]
fn test_try_from_float_bounds() {
    assert!(Fixed32::try_from_f64(32768.0).is_err());
    assert!(Fixed32::try_from_f64(-32768.0).is_ok());
    assert!(Fixed32::try_from_f64(f64::INFINITY).is_err());
    assert!(Fixed64::try_from_f64(2147483648.0).is_err());
    assert!(Fixed64::try_from_f64(2147483647.0).is_ok());
    assert!(Fixed64::try_from_f32(f32::NAN).is_err());
}

#[test]
fn test_float_roundtrip_within_half_ulp() {
    for &v in &[0.0, 0.5, -1.25, 100.0625, -3000.75] {
        let x = Fixed32::try_from_f64(v).unwrap();
        assert!((x.to_f64() - v).abs() < 1.0 / 65536.0);
        let y = Fixed64::try_from_f64(v).unwrap();
        assert!((y.to_f64() - v).abs() < 1.0 / 4294967296.0);
    }
}

// ==================== Operators and ordering ====================

#[test]
fn test_operator_forwarding() {
    let a = Fixed32::ratio(7, 2);
    let b = Fixed32::ratio(-3, 4);
    assert_eq!((a + b).raw(), a.raw() + b.raw());
    assert_eq!((a - b).raw(), a.raw() - b.raw());
    assert_eq!(a * b, Fixed32::ratio(-21, 8));
    assert_eq!(a / b, Fixed32::ratio(-14, 3));
    assert_eq!(-a, Fixed32::ratio(-7, 2));
    assert_eq!(a % Fixed32::ONE, Fixed32::HALF);
}

#[test]
fn test_assign_operators() {
    let mut x = Fixed64::from_int(10);
    x += Fixed64::ONE;
    x -= Fixed64::TWO;
    x *= Fixed64::HALF;
    x /= Fixed64::ratio(3, 2);
    assert_eq!(x, Fixed64::from_int(3));
}

#[test]
fn test_ordering_is_raw_ordering() {
    let mut v = vec![
        Fixed32::ONE,
        Fixed32::from_int(-5),
        Fixed32::ZERO,
        Fixed32::EPSILON,
        Fixed32::MIN,
    ];
    v.sort();
    assert_eq!(
        v,
        vec![
            Fixed32::MIN,
            Fixed32::from_int(-5),
            Fixed32::ZERO,
            Fixed32::EPSILON,
            Fixed32::ONE,
        ]
    );
}

#[test]
fn test_min_max_clamp_lerp() {
    let a = Fixed64::from_int(2);
    let b = Fixed64::from_int(6);
    assert_eq!(a.min(b), a);
    assert_eq!(a.max(b), b);
    assert_eq!(Fixed64::from_int(9).clamp(a, b), b);
    assert_eq!(a.lerp(b, Fixed64::HALF), Fixed64::from_int(4));
    assert_eq!(a.lerp(b, Fixed64::ZERO), a);
    assert_eq!(a.lerp(b, Fixed64::ONE), b);
}

// ==================== Bridges ====================

#[test]
fn test_widening_is_exact_narrowing_rounds() {
    let narrow = Fixed32::ratio(-7, 3);
    let wide = narrow.to_fixed64();
    assert_eq!(wide.raw(), (narrow.raw() as i64) << 16);
    assert_eq!(wide.to_fixed32(), narrow);

    // Narrowing rounds to nearest.
    let x = Fixed64::from_raw((5i64 << 32) + (1 << 15));
    assert_eq!(x.to_fixed32().raw(), (5 << 16) + 1);
}

// ==================== Display and serde ====================

#[test]
fn test_display() {
    assert_eq!(Fixed32::ratio(5, 4).to_string(), "1.2500");
    assert_eq!(Fixed64::ratio(-22, 7).to_string(), "-3.142857143");
    assert_eq!(Fixed32::MAX.to_string(), "32768.0000");
}

#[test]
fn test_serde_is_the_raw_integer() {
    assert_eq!(serde_json::to_string(&Fixed32::HALF).unwrap(), "32768");
    assert_eq!(serde_json::to_string(&Fixed64::HALF).unwrap(), "2147483648");
    let x: Fixed64 = serde_json::from_str("-15032385536").unwrap();
    assert_eq!(x, Fixed64::ratio(-7, 2));
}

// ==================== Determinism spot check ====================

#[test]
fn test_repeatability() {
    // The same computation, twice, bit for bit.
    let run = || {
        let mut acc = Fixed64::ONE;
        for i in 1..50 {
            let x = Fixed64::ratio(i, 7);
            acc = acc * x.sin() + x.exp_fast().log2_fast() - acc.frac();
        }
        acc.raw()
    };
    assert_eq!(run(), run());
}
