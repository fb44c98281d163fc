//! Kernel error type.

use thiserror::Error;

/// Failures surfaced by kernel computations.
///
/// Prime summation has no error paths; only the hyperbolic solver can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// The velocity delta was divided by a zero acceleration.
    #[error("division by zero: acceleration must be non-zero")]
    DivisionByZero,

    /// `(target - initial) / acceleration` is not representable as a finite f64.
    #[error("velocity delta divided by acceleration overflows f64")]
    RatioOverflow,

    /// A kinematic parameter was NaN or infinite.
    #[error("parameter {name:?} must be a finite number")]
    NonFiniteParameter { name: &'static str },
}
