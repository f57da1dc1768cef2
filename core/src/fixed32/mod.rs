//! Q16.16 value types
//!
//! `Fixed32` wraps the `i32` raw handled by `raw::math32` and layers the
//! operator traits, checked constructors, and serde on top. The vectors are
//! plain componentwise structs over it. Everything forwards to the raw
//! kernel; no arithmetic lives here.

pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use scalar::Fixed32;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
