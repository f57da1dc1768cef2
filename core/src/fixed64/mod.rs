//! Q32.32 value types
//!
//! The wide mirror of `fixed32`: `Fixed64` over `raw::math64`, the three
//! vectors, and the quaternion. The wide family is the one simulation state
//! should live in; the narrow family narrows into it losslessly.

pub mod quat;
pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use quat::Quat;
pub use scalar::Fixed64;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
