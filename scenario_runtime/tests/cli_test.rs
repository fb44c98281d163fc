//! End-to-end tests of the `scenarios` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn scenarios(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scenarios"))
        .arg("--log-level")
        .arg("off")
        .args(args)
        .output()
        .expect("Failed to run scenarios binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Parse a bare float line and compare within 1e-9.
fn assert_time_output(output: &Output, expected: f64) {
    let text = stdout(output);
    let value: f64 = text.trim_end().parse().expect("stdout is a bare float");
    assert!((value - expected).abs() < 1e-9, "got {}", text);
    assert!(text.ends_with('\n') && text.lines().count() == 1);
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Create a temp directory for a test.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("scenario_cli_tests").join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

#[test]
fn default_hyperbolic_prints_bare_float() {
    let out = scenarios(&["hyperbolic"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_time_output(&out, 2.3124383412727525);
}

#[test]
fn negative_limit_sums_to_zero() {
    let out = scenarios(&["primes", "--limit", "-5"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "The sum of all prime numbers up to -5 is: 0\n");
}

#[test]
fn zero_acceleration_exits_with_error() {
    let out = scenarios(&["hyperbolic", "--acceleration", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(
        stderr(&out),
        "Error: division by zero: acceleration must be non-zero\n"
    );
}

#[test]
fn subnormal_acceleration_exits_with_error() {
    let out = scenarios(&["hyperbolic", "--acceleration", "1e-320"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("overflows"), "stderr: {}", stderr(&out));
}

#[test]
fn flags_override_config_file() {
    let dir = temp_dir("flags_override");
    let path = dir.join("run.json");
    fs::write(&path, r#"{"primes":{"limit":100,"method":"sieve"}}"#).unwrap();
    let config = path.to_str().unwrap();

    // File value is used when no flag is given.
    let out = scenarios(&["--config", config, "primes"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "The sum of all prime numbers up to 100 is: 1060\n");

    // The flag beats the file value.
    let out = scenarios(&["--config", config, "primes", "--limit", "10"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "The sum of all prime numbers up to 10 is: 17\n");
}

#[test]
fn hyperbolic_flags_override_config_file() {
    let dir = temp_dir("hyperbolic_override");
    let path = dir.join("run.json");
    fs::write(&path, r#"{"hyperbolic":{"acceleration":0.0}}"#).unwrap();
    let config = path.to_str().unwrap();

    let out = scenarios(&["--config", config, "hyperbolic"]);
    assert_eq!(out.status.code(), Some(1));

    let out = scenarios(&["--config", config, "hyperbolic", "--acceleration", "0.1"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_time_output(&out, 2.3124383412727525);
}

#[test]
fn oversized_verify_limit_exits_with_error() {
    let out = scenarios(&["verify", "--limit", "10000000000000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("exceeds the cross-check maximum"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn verify_small_limit_passes() {
    let out = scenarios(&["--config", "/nonexistent/run.json", "verify"]);
    assert_eq!(out.status.code(), Some(1), "missing config must fail");

    let dir = temp_dir("verify_small");
    let path = dir.join("run.json");
    fs::write(&path, r#"{"primes":{"limit":1000}}"#).unwrap();
    let out = scenarios(&["--config", path.to_str().unwrap(), "verify", "--limit", "1000"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).starts_with(
        "[OK] is_prime agrees with the sieve up to 1000: 168 primes, sum 76127\n"
    ));
}
