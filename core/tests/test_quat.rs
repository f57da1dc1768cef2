//! Quaternion tests
//!
//! Rotations are checked by their action on vectors rather than by
//! component comparison wherever possible: two quaternions that differ in
//! sign (or by rounding) can still be the same rotation.

use fixmath_core_rs::{Fixed64, Quat, Vec3_64 as Vec3};

const TOL: Fixed64 = Fixed64::from_raw(1 << 10);

fn fi(v: i64) -> Fixed64 {
    Fixed64::from_int(v)
}

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!((a.x - b.x).abs() <= TOL, "{} vs {}", a, b);
    assert!((a.y - b.y).abs() <= TOL, "{} vs {}", a, b);
    assert!((a.z - b.z).abs() <= TOL, "{} vs {}", a, b);
}

fn assert_same_rotation(a: Quat, b: Quat) {
    // q and -q act identically; compare |dot| to 1.
    let d = a.dot(b).abs();
    assert!((d - Fixed64::ONE).abs() <= TOL, "{} vs {} (dot {})", a, b, d);
}

// ==================== Construction ====================

#[test]
fn test_identity() {
    assert_eq!(Quat::default(), Quat::IDENTITY);
    let v = Vec3::new(fi(1), fi(-2), fi(3));
    assert_eq!(Quat::IDENTITY.rotate_vector(v), v);
}

#[test]
fn test_axis_angle_quarter_turns() {
    let qz = Quat::from_axis_angle(Vec3::Z, Fixed64::HALF_PI);
    assert_vec_close(qz.rotate_vector(Vec3::X), Vec3::Y);
    assert_vec_close(qz.rotate_vector(Vec3::Y), -Vec3::X);
    assert_vec_close(qz.rotate_vector(Vec3::Z), Vec3::Z);

    let qx = Quat::from_axis_angle(Vec3::X, Fixed64::HALF_PI);
    assert_vec_close(qx.rotate_vector(Vec3::Y), Vec3::Z);
}

#[test]
fn test_full_turn_is_identity_rotation() {
    let q = Quat::from_axis_angle(Vec3::Y, Fixed64::TWO_PI);
    let v = Vec3::new(fi(2), fi(5), fi(-1));
    assert_vec_close(q.rotate_vector(v), v);
}

#[test]
fn test_yaw_pitch_roll_composition() {
    let yaw = Fixed64::ratio(1, 3);
    let pitch = Fixed64::ratio(-2, 5);
    let roll = Fixed64::ratio(1, 7);
    let composed = Quat::from_yaw_pitch_roll(yaw, pitch, roll);
    let manual = Quat::from_axis_angle(Vec3::Y, yaw)
        * Quat::from_axis_angle(Vec3::X, pitch)
        * Quat::from_axis_angle(Vec3::Z, roll);
    assert_same_rotation(composed, manual);
}

// ==================== Group structure ====================

#[test]
fn test_mul_composes_rotations() {
    let a = Quat::from_axis_angle(Vec3::Z, Fixed64::ratio(2, 3));
    let b = Quat::from_axis_angle(Vec3::X, Fixed64::ratio(-1, 2));
    let v = Vec3::new(fi(1), fi(2), fi(3));
    let via_product = (a * b).rotate_vector(v);
    let via_sequence = a.rotate_vector(b.rotate_vector(v));
    assert_vec_close(via_product, via_sequence);
}

#[test]
fn test_inverse_and_conjugate() {
    let q = Quat::from_yaw_pitch_roll(
        Fixed64::ratio(3, 7),
        Fixed64::ratio(1, 4),
        Fixed64::ratio(-2, 9),
    );
    let v = Vec3::new(fi(4), fi(-1), fi(2));
    assert_vec_close(q.inverse().rotate_vector(q.rotate_vector(v)), v);
    // For unit quaternions the conjugate is the inverse.
    assert_same_rotation(q.inverse(), q.inverse_unit());
    assert_same_rotation(q * q.conjugate(), Quat::IDENTITY);
}

#[test]
fn test_norm_and_normalize() {
    let q = Quat::new(fi(1), fi(2), fi(3), fi(4));
    assert_eq!(q.norm_sqr(), fi(30));
    let n = q.normalize();
    assert!((n.norm_sqr() - Fixed64::ONE).abs() <= TOL);
    // A unit quaternion rotation preserves length.
    let v = Vec3::new(fi(1), fi(0), fi(-2));
    let r = n.rotate_vector(v);
    assert!((r.length_sqr() - v.length_sqr()).abs() <= TOL * fi(8));
}

// ==================== Interpolation ====================

#[test]
fn test_slerp_endpoints() {
    let a = Quat::from_axis_angle(Vec3::Y, Fixed64::ratio(1, 5));
    let b = Quat::from_axis_angle(Vec3::Y, Fixed64::ratio(6, 5));
    assert_same_rotation(a.slerp(b, Fixed64::ZERO), a);
    assert_same_rotation(a.slerp(b, Fixed64::ONE), b);
}

#[test]
fn test_slerp_constant_speed_on_one_axis() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::Z, Fixed64::HALF_PI);
    for (t_num, expect_num) in [(1i64, 1i64), (2, 2), (3, 3)] {
        let t = Fixed64::ratio(t_num, 4);
        let angle = Fixed64::HALF_PI * Fixed64::ratio(expect_num, 4);
        let expect = Quat::from_axis_angle(Vec3::Z, angle);
        assert_same_rotation(a.slerp(b, t), expect);
    }
}

#[test]
fn test_slerp_takes_short_way() {
    let a = Quat::from_axis_angle(Vec3::Z, Fixed64::ratio(1, 10));
    let b = -Quat::from_axis_angle(Vec3::Z, Fixed64::ratio(2, 10));
    // b is the same rotation with flipped sign; slerp must not swing wide.
    let mid = a.slerp(b, Fixed64::HALF);
    let expect = Quat::from_axis_angle(Vec3::Z, Fixed64::ratio(3, 20));
    assert_same_rotation(mid, expect);
}

#[test]
fn test_lerp_stays_normalized() {
    let a = Quat::from_axis_angle(Vec3::X, Fixed64::ratio(1, 3));
    let b = Quat::from_axis_angle(Vec3::Y, Fixed64::ratio(5, 4));
    for t_num in 0..=4 {
        let q = a.lerp(b, Fixed64::ratio(t_num, 4));
        assert!((q.norm_sqr() - Fixed64::ONE).abs() <= TOL);
    }
}

// ==================== Frame construction ====================

#[test]
fn test_from_two_vectors() {
    let a = Vec3::new(fi(1), fi(2), fi(-1));
    let b = Vec3::new(fi(-2), fi(1), fi(3));
    let q = Quat::from_two_vectors(a, b);
    let rotated = q.rotate_vector(a.normalize());
    assert_vec_close(rotated, b.normalize());
}

#[test]
fn test_from_two_vectors_antiparallel() {
    for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(fi(1), fi(1), fi(0)).normalize()] {
        let q = Quat::from_two_vectors(v, -v);
        assert_vec_close(q.rotate_vector(v), -v);
        assert!((q.norm_sqr() - Fixed64::ONE).abs() <= TOL);
    }
}

#[test]
fn test_look_rotation() {
    // Looking down +Z with +Y up is the identity frame.
    assert_same_rotation(Quat::look_rotation(Vec3::Z, Vec3::Y), Quat::IDENTITY);

    // Any valid forward/up pair maps +Z onto the forward direction.
    let cases = [
        (Vec3::X, Vec3::Y),
        (Vec3::new(fi(1), fi(0), fi(1)), Vec3::Y),
        (Vec3::new(fi(2), fi(1), fi(-3)), Vec3::Y),
        (-Vec3::Z, Vec3::Y),
    ];
    for (forward, up) in cases {
        let q = Quat::look_rotation(forward, up);
        assert_vec_close(q.rotate_vector(Vec3::Z), forward.normalize());
        assert!((q.norm_sqr() - Fixed64::ONE).abs() <= TOL);
    }
}

// ==================== Serde ====================

#[test]
fn test_serde_roundtrip() {
    let q = Quat::from_yaw_pitch_roll(
        Fixed64::ratio(1, 9),
        Fixed64::ratio(2, 9),
        Fixed64::ratio(4, 9),
    );
    let json = serde_json::to_string(&q).unwrap();
    let back: Quat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}
