#![forbid(unsafe_code)]

/// Kernel v1. Any change to computed values or canonical bytes requires kernel_v2.
pub const KERNEL_VERSION: u32 = 1;

pub mod error;
pub mod primes;
pub mod hyperbolic;
pub mod report;
