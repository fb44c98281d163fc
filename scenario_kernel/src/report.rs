/// Scenario Kernel v1: Canonical Reports
///
/// Deterministic canonical serialization + SHA-256 hashing of
/// computation results.
///
/// Rules:
///   - kernel_version first, then kind, then result fields in fixed order
///   - prime sums: integers only; the method is not part of the identity
///   - velocity times: every f64 written as its shortest round-trip decimal
///     string, never as a JSON float
///   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::KernelError;
use crate::hyperbolic::KinematicParameters;
use crate::primes::{sum_of_primes, PrimeMethod};
use crate::KERNEL_VERSION;

/// Result of a prime summation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeSumReport {
    pub limit: i64,
    pub sum: u64,
    pub method: PrimeMethod,
}

impl PrimeSumReport {
    pub fn compute(limit: i64, method: PrimeMethod) -> Self {
        Self {
            limit,
            sum: sum_of_primes(limit, method),
            method,
        }
    }
}

/// Result of a time-to-velocity solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityTimeReport {
    pub parameters: KinematicParameters,
    pub elapsed_time: f64,
}

impl VelocityTimeReport {
    pub fn compute(parameters: KinematicParameters) -> Result<Self, KernelError> {
        let elapsed_time = parameters.time_to_reach()?;
        Ok(Self {
            parameters,
            elapsed_time,
        })
    }
}

/// Any kernel result that can be canonicalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    PrimeSum(PrimeSumReport),
    VelocityTime(VelocityTimeReport),
}

impl Report {
    /// Stable identifier, used as the `kind` field and as record file stem.
    pub fn kind(&self) -> &'static str {
        match self {
            Report::PrimeSum(_) => "prime_sum",
            Report::VelocityTime(_) => "velocity_time",
        }
    }
}

impl From<PrimeSumReport> for Report {
    fn from(r: PrimeSumReport) -> Self {
        Report::PrimeSum(r)
    }
}

impl From<VelocityTimeReport> for Report {
    fn from(r: VelocityTimeReport) -> Self {
        Report::VelocityTime(r)
    }
}

/// Shortest decimal string that parses back to the same f64.
pub fn canonical_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Canonical serialization of a report to UTF-8 JSON bytes.
pub fn canonical_serialize(report: &Report) -> Vec<u8> {
    let obj = build_canonical_value(report);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(report: &Report) -> String {
    let bytes = canonical_serialize(report);
    hex_digest(&bytes)
}

/// Lowercase hex SHA-256 of arbitrary bytes.
pub fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// serde_json::Map preserves insertion order, which fixes the field order.
fn build_canonical_value(report: &Report) -> Value {
    let mut obj = Map::new();
    obj.insert("kernel_version".to_string(), Value::from(KERNEL_VERSION));
    obj.insert("kind".to_string(), Value::String(report.kind().to_string()));

    match report {
        Report::PrimeSum(r) => {
            obj.insert("limit".to_string(), Value::from(r.limit));
            obj.insert("sum".to_string(), Value::from(r.sum));
        }
        Report::VelocityTime(r) => {
            let p = &r.parameters;
            for (name, value) in [
                ("target_velocity", p.target_velocity),
                ("initial_velocity", p.initial_velocity),
                ("acceleration", p.acceleration),
                ("elapsed_time", r.elapsed_time),
            ] {
                obj.insert(name.to_string(), Value::String(canonical_float(value)));
            }
        }
    }

    Value::Object(obj)
}
