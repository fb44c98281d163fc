//! Run configuration: defaults reproduce the hardcoded example scenarios.
//!
//! Loaded from an optional JSON file. Missing fields take their defaults,
//! unknown fields are rejected. CLI flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use scenario_kernel::hyperbolic::KinematicParameters;
use scenario_kernel::primes::PrimeMethod;

use crate::error::RuntimeError;

/// Upper bound used when no limit is configured.
pub const DEFAULT_PRIME_LIMIT: i64 = 1_000_000;

/// Largest n checked by `verify` when no limit is configured.
pub const DEFAULT_VERIFY_LIMIT: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimeConfig {
    pub limit: i64,
    pub method: PrimeMethod,
}

impl Default for PrimeConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PRIME_LIMIT,
            method: PrimeMethod::TrialDivision,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    pub limit: i64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_VERIFY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub primes: PrimeConfig,
    pub hyperbolic: KinematicParameters,
    pub verify: VerifyConfig,
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overrides {
    pub prime_limit: Option<i64>,
    pub prime_method: Option<PrimeMethod>,
    pub target_velocity: Option<f64>,
    pub initial_velocity: Option<f64>,
    pub acceleration: Option<f64>,
    pub verify_limit: Option<i64>,
}

impl RunConfig {
    /// Replace every field that has an override.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(limit) = overrides.prime_limit {
            self.primes.limit = limit;
        }
        if let Some(method) = overrides.prime_method {
            self.primes.method = method;
        }
        if let Some(v) = overrides.target_velocity {
            self.hyperbolic.target_velocity = v;
        }
        if let Some(v) = overrides.initial_velocity {
            self.hyperbolic.initial_velocity = v;
        }
        if let Some(a) = overrides.acceleration {
            self.hyperbolic.acceleration = a;
        }
        if let Some(limit) = overrides.verify_limit {
            self.verify.limit = limit;
        }
    }
}

/// Read a JSON config file.
pub fn load_config(path: &Path) -> Result<RunConfig, RuntimeError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| RuntimeError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<RunConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_example_scenarios() {
        let config = RunConfig::default();
        assert_eq!(config.primes.limit, 1_000_000);
        assert_eq!(config.primes.method, PrimeMethod::TrialDivision);
        assert_eq!(config.hyperbolic, KinematicParameters::new(0.5, 0.0, 0.1));
        assert_eq!(config.verify.limit, 100_000);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config =
            parse_config(r#"{"primes":{"method":"sieve"},"hyperbolic":{"acceleration":2.0}}"#)
                .unwrap();
        assert_eq!(config.primes.limit, DEFAULT_PRIME_LIMIT);
        assert_eq!(config.primes.method, PrimeMethod::Sieve);
        assert_eq!(config.hyperbolic.acceleration, 2.0);
        assert_eq!(config.hyperbolic.target_velocity, 0.5);
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let mut config = parse_config(
            r#"{"primes":{"limit":50,"method":"sieve"},"hyperbolic":{"acceleration":2.0},"verify":{"limit":10}}"#,
        )
        .unwrap();
        config.apply_overrides(&Overrides {
            prime_limit: Some(-5),
            acceleration: Some(0.25),
            verify_limit: Some(20),
            ..Overrides::default()
        });
        assert_eq!(config.primes.limit, -5);
        assert_eq!(config.hyperbolic.acceleration, 0.25);
        assert_eq!(config.verify.limit, 20);
        // Fields without an override keep the file value.
        assert_eq!(config.primes.method, PrimeMethod::Sieve);
        assert_eq!(config.hyperbolic.target_velocity, 0.5);
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let original =
            parse_config(r#"{"primes":{"limit":7},"hyperbolic":{"target_velocity":3.0}}"#).unwrap();
        let mut config = original;
        config.apply_overrides(&Overrides::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(parse_config(r#"{"primes":{"limit":5,"cache":true}}"#).is_err());
        assert!(parse_config(r#"{"storage":{}}"#).is_err());
        assert!(parse_config(r#"{"primes":{"method":"wheel"}}"#).is_err());
    }
}
