//! Runner: executes kernel computations with logging.
//!
//! All numeric work is delegated to the kernel. This layer only
//! reports progress and timing.

use std::time::Instant;

use log::{debug, info};

use scenario_kernel::error::KernelError;
use scenario_kernel::hyperbolic::KinematicParameters;
use scenario_kernel::report::{canonical_hash, PrimeSumReport, Report, VelocityTimeReport};

use crate::config::PrimeConfig;

/// Sum the primes up to `config.limit` with `config.method`.
pub fn run_prime_sum(config: &PrimeConfig) -> PrimeSumReport {
    info!(
        "Summing primes up to {} using {}",
        config.limit, config.method
    );
    let started = Instant::now();
    let report = PrimeSumReport::compute(config.limit, config.method);
    debug!(
        "Prime sum up to {} = {} in {:?}",
        report.limit,
        report.sum,
        started.elapsed()
    );
    report
}

/// Solve for the time at which the target velocity is reached.
pub fn run_velocity_time(
    parameters: &KinematicParameters,
) -> Result<VelocityTimeReport, KernelError> {
    info!(
        "Solving time to reach velocity {} from {} at acceleration {}",
        parameters.target_velocity, parameters.initial_velocity, parameters.acceleration
    );
    let started = Instant::now();
    let report = VelocityTimeReport::compute(*parameters)?;
    debug!(
        "Elapsed time {} solved in {:?}",
        report.elapsed_time,
        started.elapsed()
    );
    Ok(report)
}

/// Pair a report with its canonical hash.
pub fn with_hash(report: Report) -> (Report, String) {
    let hash = canonical_hash(&report);
    debug!("{} hash: {}", report.kind(), hash);
    (report, hash)
}
