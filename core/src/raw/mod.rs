//! Raw fixed-point kernels
//!
//! Stateless functions operating directly on the raw integer representation:
//! `math32` on Q16.16 (`i32` raw) and `math64` on Q32.32 (`i64` raw).
//! Everything above this layer (scalars, vectors, quaternions) delegates
//! here; nothing here depends on anything else in the crate.
//!
//! # Determinism
//!
//! Every function is a pure integer computation: same raw inputs produce the
//! same raw output on every platform, every run. No hardware float is used
//! anywhere. Overflow wraps per two's complement, never checked and never
//! saturated, so results stay bit-comparable across implementations.

pub mod consts;
pub mod math32;
pub mod math64;

/// Domain-error escape hatch, selected at compile time.
///
/// With the `safety-checks` feature the offending call panics, naming the
/// function, the parameter and the raw value; a domain error is a caller
/// bug. Without the feature the call returns the fallback (raw zero for the
/// kernels) and the caller must tolerate it by construction.
macro_rules! domain_error {
    ($func:expr, $param:expr, $value:expr) => {
        domain_error!($func, $param, $value, 0)
    };
    ($func:expr, $param:expr, $value:expr, $fallback:expr) => {{
        #[cfg(feature = "safety-checks")]
        {
            panic!(
                "{}: argument `{}` out of domain (raw {})",
                $func, $param, $value
            );
        }
        #[cfg(not(feature = "safety-checks"))]
        {
            let _ = ($func, $param, $value);
            return $fallback;
        }
    }};
}

pub(crate) use domain_error;
