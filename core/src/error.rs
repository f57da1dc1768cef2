//! Error types for fallible conversions
//!
//! The arithmetic kernels never return `Result`: inside the hot path a
//! domain violation either panics (`safety-checks` feature) or yields raw
//! zero. The fallible surface is the conversion layer, where a fixed value
//! is built from floats or ratios supplied by config files or user input
//! and the caller can and should handle failure.

use thiserror::Error;

/// Errors that can occur when constructing a fixed-point value.
#[derive(Debug, Error, PartialEq)]
pub enum FixedError {
    /// The float is NaN, infinite, or outside the representable range.
    #[error("Value {0} is not representable in this fixed-point format")]
    OutOfRange(f64),

    /// A ratio constructor was given a zero denominator.
    #[error("Ratio denominator must be non-zero")]
    ZeroDenominator,
}
