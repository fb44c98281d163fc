//! Verification: determinism and trial-division vs sieve cross-checks.

use log::{debug, info};
use thiserror::Error;

use scenario_kernel::error::KernelError;
use scenario_kernel::primes::{calculate_sum_of_primes, is_prime, sieve, sum_of_primes_sieve};
use scenario_kernel::report::{canonical_hash, Report};

use crate::error::RuntimeError;

/// First disagreement found by [`cross_check_primes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("is_prime({n}) = {trial} but the sieve says {sieve}")]
    Primality { n: i64, trial: bool, sieve: bool },

    #[error("sum of primes up to {limit}: trial division {trial}, sieve {sieve}")]
    Sum { limit: i64, trial: u64, sieve: u64 },
}

/// Summary of a passing cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossCheck {
    pub limit: i64,
    pub prime_count: usize,
    pub sum: u64,
}

/// Largest limit [`cross_check_primes`] accepts. The sieve table is
/// allocated up front, one byte per candidate.
pub const MAX_CROSS_CHECK_LIMIT: i64 = 10_000_000;

/// Compare `is_prime` with the sieve for every n in `0..=limit`,
/// then compare both summation methods.
pub fn cross_check_primes(limit: i64) -> Result<CrossCheck, RuntimeError> {
    if limit > MAX_CROSS_CHECK_LIMIT {
        return Err(RuntimeError::LimitTooLarge {
            limit,
            max: MAX_CROSS_CHECK_LIMIT,
        });
    }
    info!("Cross-checking trial division against sieve up to {}", limit);
    let table = sieve(limit);
    let mut prime_count = 0;

    for (n, &expected) in table.iter().enumerate() {
        let n = n as i64;
        let trial = is_prime(n);
        if trial != expected {
            return Err(Mismatch::Primality {
                n,
                trial,
                sieve: expected,
            }
            .into());
        }
        if expected {
            prime_count += 1;
        }
    }

    let trial = calculate_sum_of_primes(limit);
    let sieve = sum_of_primes_sieve(limit);
    if trial != sieve {
        return Err(Mismatch::Sum {
            limit,
            trial,
            sieve,
        }
        .into());
    }

    debug!("{} primes up to {}, sum {}", prime_count, limit, trial);
    Ok(CrossCheck {
        limit,
        prime_count,
        sum: trial,
    })
}

/// Compute the same report twice and require identical canonical hashes.
/// Returns the agreed hash.
pub fn verify_determinism<F>(compute: F) -> Result<String, RuntimeError>
where
    F: Fn() -> Result<Report, KernelError>,
{
    let first = compute()?;
    let second = compute()?;
    let hash1 = canonical_hash(&first);
    let hash2 = canonical_hash(&second);

    if hash1 != hash2 {
        return Err(RuntimeError::Verification(format!(
            "two runs of {} produced different hashes: {} vs {}",
            first.kind(),
            hash1,
            hash2
        )));
    }
    debug!("{} is deterministic: {}", first.kind(), hash1);
    Ok(hash1)
}
