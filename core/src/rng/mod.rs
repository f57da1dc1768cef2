//! Deterministic random generation
//!
//! `DetRng` is the raw stream (xorshift128); `ChanceRng` layers
//! bad-luck-protected boolean trials on top of it. Both serialize their full
//! state so a checkpointed simulation resumes on the exact same sequence.

pub mod chance;
pub mod xorshift;

pub use chance::ChanceRng;
pub use xorshift::DetRng;
