//! Fixmath Core - Deterministic Fixed-Point Math
//!
//! Platform-independent Q16.16 / Q32.32 arithmetic with transcendental
//! functions, vectors, a rotation quaternion, and deterministic random
//! generation. Built for lockstep simulation: every operation is pure
//! integer bit manipulation, so results are identical on every machine,
//! every run.
//!
//! # Architecture
//!
//! - **raw**: stateless kernels on the raw integer representations
//!   (`math32` on `i32` Q16.16, `math64` on `i64` Q32.32) plus the
//!   compile-time constant/coefficient builders
//! - **fixed32**: `Fixed32` scalar and its `Vec2`/`Vec3`/`Vec4`
//! - **fixed64**: `Fixed64` scalar, its vectors, and `Quat`
//! - **rng**: `DetRng` (xorshift128) and `ChanceRng` (bad-luck protection)
//! - **error**: `FixedError` for the checked conversion API
//!
//! # Critical Invariants
//!
//! 1. No hardware float anywhere in the arithmetic paths
//! 2. Overflow wraps (two's complement), never checked or saturated
//! 3. The raw integer is the serialized form, so checkpoints are bit-exact
//! 4. Approximation tiers (`_fast`, `_fastest`) change polynomial degree or
//!    iteration count, never the algorithm shape

// Module declarations
pub mod error;
pub mod fixed32;
pub mod fixed64;
pub mod raw;
pub mod rng;

// Re-exports for convenience
pub use error::FixedError;
pub use fixed32::{Fixed32, Vec2, Vec3, Vec4};
pub use fixed64::{
    Fixed64, Quat, Vec2 as Vec2_64, Vec3 as Vec3_64, Vec4 as Vec4_64,
};
pub use rng::{ChanceRng, DetRng};
