/// Scenario Kernel v1: Hyperbolic Time Solver
///
/// Velocity model: v(t) = v0 + a * sinh(t).
/// Solved for t: t = asinh((v - v0) / a).
///
/// Zero acceleration is an error, never a silent NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// Above this magnitude `x * x + 1 == x * x` in f64, so
/// `ln(x + sqrt(x^2 + 1)) == ln(2x)` to working precision.
const LARGE_ARGUMENT: f64 = (1u64 << 28) as f64;

/// ln(x + sqrt(x^2 + 1)).
///
/// Negative arguments go through the odd symmetry asinh(-x) = -asinh(x):
/// the sum `x + sqrt(x^2 + 1)` cancels to zero for large negative `x`.
pub fn inverse_sinh(x: f64) -> f64 {
    if x < 0.0 {
        return -inverse_sinh(-x);
    }
    if x > LARGE_ARGUMENT {
        return std::f64::consts::LN_2 + x.ln();
    }
    (x + (x * x + 1.0).sqrt()).ln()
}

/// Time at which v(t) = v0 + a * sinh(t) reaches `target_velocity`.
///
/// Negative when the target lies below the initial velocity
/// (for positive acceleration).
pub fn time_to_reach_velocity(
    target_velocity: f64,
    initial_velocity: f64,
    acceleration: f64,
) -> Result<f64, KernelError> {
    check_finite("target_velocity", target_velocity)?;
    check_finite("initial_velocity", initial_velocity)?;
    check_finite("acceleration", acceleration)?;
    // Matches both +0.0 and -0.0.
    if acceleration == 0.0 {
        return Err(KernelError::DivisionByZero);
    }
    let ratio = (target_velocity - initial_velocity) / acceleration;
    if !ratio.is_finite() {
        return Err(KernelError::RatioOverflow);
    }
    Ok(inverse_sinh(ratio))
}

/// Forward model: v(t) = v0 + a * sinh(t).
pub fn velocity_at(initial_velocity: f64, acceleration: f64, t: f64) -> f64 {
    initial_velocity + acceleration * t.sinh()
}

fn check_finite(name: &'static str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KernelError::NonFiniteParameter { name })
    }
}

/// Input triple for [`time_to_reach_velocity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KinematicParameters {
    pub target_velocity: f64,
    pub initial_velocity: f64,
    pub acceleration: f64,
}

impl Default for KinematicParameters {
    /// A particle at rest, accelerating at 0.1, targeting 0.5.
    fn default() -> Self {
        Self {
            target_velocity: 0.5,
            initial_velocity: 0.0,
            acceleration: 0.1,
        }
    }
}

impl KinematicParameters {
    pub fn new(target_velocity: f64, initial_velocity: f64, acceleration: f64) -> Self {
        Self {
            target_velocity,
            initial_velocity,
            acceleration,
        }
    }

    pub fn time_to_reach(&self) -> Result<f64, KernelError> {
        time_to_reach_velocity(
            self.target_velocity,
            self.initial_velocity,
            self.acceleration,
        )
    }
}
