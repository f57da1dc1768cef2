//! Q32.32 rotation quaternion
//!
//! Hamilton convention, right-handed, scalar part last. All construction
//! paths end in a renormalize, so accumulated rounding never drifts a
//! rotation away from the unit sphere by more than one normalize step.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::fixed64::{Fixed64, Vec3};

/// Threshold above which slerp falls back to the normalized lerp: the arc
/// is so short that the great-circle weights lose precision before the
/// straight blend does.
const NLERP_DOT: Fixed64 = Fixed64::from_raw(Fixed64::ONE.raw() - (Fixed64::ONE.raw() >> 11));

/// Antiparallel detection margin for [`Quat::from_two_vectors`].
const ANTIPARALLEL_EPS: Fixed64 = Fixed64::from_raw(1 << 16);

/// Deterministic rotation quaternion over [`Fixed64`].
///
/// # Example
/// ```
/// use fixmath_core_rs::{Fixed64, Quat, Vec3_64 as Vec3};
///
/// let q = Quat::from_axis_angle(Vec3::Z, Fixed64::HALF_PI);
/// let v = q.rotate_vector(Vec3::X);
/// assert!((v.y - Fixed64::ONE).abs() <= Fixed64::from_raw(1 << 8));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Quat {
    pub x: Fixed64,
    pub y: Fixed64,
    pub z: Fixed64,
    pub w: Fixed64,
}

impl Default for Quat {
    fn default() -> Self {
        Quat::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: Fixed64::ZERO,
        y: Fixed64::ZERO,
        z: Fixed64::ZERO,
        w: Fixed64::ONE,
    };

    #[inline]
    pub const fn new(x: Fixed64, y: Fixed64, z: Fixed64, w: Fixed64) -> Self {
        Quat { x, y, z, w }
    }

    /// The vector (imaginary) part.
    #[inline]
    pub const fn vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotation of `angle` radians about a unit `axis`.
    ///
    /// The axis is not normalized here; pass a unit vector.
    pub fn from_axis_angle(axis: Vec3, angle: Fixed64) -> Self {
        let half = Fixed64::from_raw(angle.raw() >> 1);
        let s = half.sin();
        let c = half.cos();
        Quat::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Yaw about +Y, then pitch about +X, then roll about +Z, composed in
    /// that order.
    pub fn from_yaw_pitch_roll(yaw: Fixed64, pitch: Fixed64, roll: Fixed64) -> Self {
        Quat::from_axis_angle(Vec3::Y, yaw)
            * Quat::from_axis_angle(Vec3::X, pitch)
            * Quat::from_axis_angle(Vec3::Z, roll)
    }

    /// Shortest rotation taking `from` onto `to`. Inputs need not be unit
    /// length. Antiparallel inputs rotate π about an arbitrary orthogonal
    /// axis.
    pub fn from_two_vectors(from: Vec3, to: Vec3) -> Self {
        let d = from.dot(to);
        let c = from.cross(to);
        let w = (from.length_sqr() * to.length_sqr()).sqrt_precise() + d;
        if w <= ANTIPARALLEL_EPS && c.length_sqr() <= ANTIPARALLEL_EPS {
            // 180 degrees: any axis orthogonal to `from` works, pick the
            // better-conditioned of the two obvious candidates.
            let axis = if from.x.abs() > from.z.abs() {
                Vec3::new(-from.y, from.x, Fixed64::ZERO)
            } else {
                Vec3::new(Fixed64::ZERO, -from.z, from.y)
            }
            .normalize();
            return Quat::new(axis.x, axis.y, axis.z, Fixed64::ZERO);
        }
        Quat::new(c.x, c.y, c.z, w).normalize()
    }

    /// Rotation whose +Z maps to `forward` with +Y staying as close to `up`
    /// as possible. `forward` must not be parallel to `up`.
    pub fn look_rotation(forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        let r = up.cross(f).normalize();
        let u = f.cross(r);
        // Column basis (r, u, f), trace-based extraction.
        let four = Fixed64::from_int(4);
        let trace = r.x + u.y + f.z;
        let q = if trace > Fixed64::ZERO {
            let s = (trace + Fixed64::ONE).sqrt_precise() * Fixed64::TWO;
            Quat::new(
                (u.z - f.y) / s,
                (f.x - r.z) / s,
                (r.y - u.x) / s,
                s / four,
            )
        } else if r.x > u.y && r.x > f.z {
            let s = (Fixed64::ONE + r.x - u.y - f.z).sqrt_precise() * Fixed64::TWO;
            Quat::new(
                s / four,
                (u.x + r.y) / s,
                (f.x + r.z) / s,
                (u.z - f.y) / s,
            )
        } else if u.y > f.z {
            let s = (Fixed64::ONE + u.y - r.x - f.z).sqrt_precise() * Fixed64::TWO;
            Quat::new(
                (u.x + r.y) / s,
                s / four,
                (f.y + u.z) / s,
                (f.x - r.z) / s,
            )
        } else {
            let s = (Fixed64::ONE + f.z - r.x - u.y).sqrt_precise() * Fixed64::TWO;
            Quat::new(
                (f.x + r.z) / s,
                (f.y + u.z) / s,
                s / four,
                (r.y - u.x) / s,
            )
        };
        q.normalize()
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// 4D dot product.
    #[inline]
    pub fn dot(self, other: Self) -> Fixed64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared norm, accumulated in 128-bit.
    pub fn norm_sqr(self) -> Fixed64 {
        let x = self.x.raw() as i128;
        let y = self.y.raw() as i128;
        let z = self.z.raw() as i128;
        let w = self.w.raw() as i128;
        Fixed64::from_raw((((x * x) + (y * y) + (z * z) + (w * w)) >> 32) as i64)
    }

    #[inline]
    pub fn norm(self) -> Fixed64 {
        self.norm_sqr().sqrt()
    }

    /// Rescale to unit norm. Zero norm is a domain error.
    pub fn normalize(self) -> Self {
        let n = self.norm();
        Quat::new(self.x / n, self.y / n, self.z / n, self.w / n)
    }

    /// General inverse: conjugate over squared norm. Zero norm is a domain
    /// error.
    pub fn inverse(self) -> Self {
        let n = self.norm_sqr();
        Quat::new(-self.x / n, -self.y / n, -self.z / n, self.w / n)
    }

    /// Inverse of a unit quaternion: just the conjugate, no division.
    #[inline]
    pub fn inverse_unit(self) -> Self {
        self.conjugate()
    }

    /// Rotate a vector: `v + 2w(q×v) + 2q×(q×v)`.
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let qv = self.vec();
        let t = qv.cross(v) * Fixed64::TWO;
        v + t * self.w + qv.cross(t)
    }

    /// Normalized straight-line blend, sign-corrected to take the short
    /// way around.
    pub fn lerp(self, other: Self, t: Fixed64) -> Self {
        let other = if self.dot(other) < Fixed64::ZERO {
            -other
        } else {
            other
        };
        Quat::new(
            self.x.lerp(other.x, t),
            self.y.lerp(other.y, t),
            self.z.lerp(other.z, t),
            self.w.lerp(other.w, t),
        )
        .normalize()
    }

    /// Great-circle interpolation between unit quaternions. Falls back to
    /// [`Quat::lerp`] once the inputs are nearly parallel.
    pub fn slerp(self, other: Self, t: Fixed64) -> Self {
        let mut other = other;
        let mut d = self.dot(other);
        if d < Fixed64::ZERO {
            other = -other;
            d = -d;
        }
        if d > NLERP_DOT {
            return self.lerp(other, t);
        }
        let theta = d.acos();
        let s = theta.sin();
        let w1 = ((Fixed64::ONE - t) * theta).sin() / s;
        let w2 = (t * theta).sin() / s;
        self * w1 + other * w2
    }
}

impl Mul for Quat {
    type Output = Self;
    /// Hamilton product via the cross+dot decomposition.
    fn mul(self, rhs: Self) -> Self {
        let v1 = self.vec();
        let v2 = rhs.vec();
        let v = v2 * self.w + v1 * rhs.w + v1.cross(v2);
        let w = self.w * rhs.w - v1.dot(v2);
        Quat::new(v.x, v.y, v.z, w)
    }
}

impl Mul<Fixed64> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Fixed64) -> Self {
        Quat::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Quat::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Quat::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
