/// Scenario Kernel v1: Prime Summation
///
/// Trial-division primality and summation, plus a sieve used as the
/// reference implementation. Integer arithmetic only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Checked accumulation. Panics on u64 overflow.
fn checked_add(a: u64, b: u64) -> u64 {
    match a.checked_add(b) {
        Some(result) => result,
        None => panic!("Overflow: {} + {} overflows u64", a, b),
    }
}

/// Trial division by every `i` in `2..=floor(sqrt(n))`.
///
/// `i <= n / i` is the integer form of `i * i <= n` and cannot overflow.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Sum of every prime in `2..=limit`. Zero when `limit < 2`.
pub fn calculate_sum_of_primes(limit: i64) -> u64 {
    let mut prime_sum = 0u64;
    for num in 2..=limit {
        if is_prime(num) {
            prime_sum = checked_add(prime_sum, num as u64);
        }
    }
    prime_sum
}

/// Sieve of Eratosthenes over `0..=limit`.
/// Index `i` is true iff `i` is prime. Empty for a negative limit.
pub fn sieve(limit: i64) -> Vec<bool> {
    if limit < 0 {
        return Vec::new();
    }
    let len = match usize::try_from(limit) {
        Ok(l) => l + 1,
        Err(_) => panic!("Sieve limit {} is not addressable", limit),
    };

    let mut table = vec![true; len];
    table[0] = false;
    if len > 1 {
        table[1] = false;
    }

    let mut i = 2;
    while i * i < len {
        if table[i] {
            let mut multiple = i * i;
            while multiple < len {
                table[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }
    table
}

/// Same contract as [`calculate_sum_of_primes`], computed from [`sieve`].
pub fn sum_of_primes_sieve(limit: i64) -> u64 {
    sieve(limit)
        .iter()
        .enumerate()
        .filter(|(_, &prime)| prime)
        .fold(0u64, |acc, (n, _)| checked_add(acc, n as u64))
}

/// How a prime sum is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimeMethod {
    #[default]
    TrialDivision,
    Sieve,
}

impl PrimeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimeMethod::TrialDivision => "trial_division",
            PrimeMethod::Sieve => "sieve",
        }
    }
}

impl fmt::Display for PrimeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trial_division" => Ok(PrimeMethod::TrialDivision),
            "sieve" => Ok(PrimeMethod::Sieve),
            other => Err(format!(
                "unknown prime method {:?}: expected trial_division or sieve",
                other
            )),
        }
    }
}

/// Dispatch on `method`. Both methods return identical sums.
pub fn sum_of_primes(limit: i64, method: PrimeMethod) -> u64 {
    match method {
        PrimeMethod::TrialDivision => calculate_sum_of_primes(limit),
        PrimeMethod::Sieve => sum_of_primes_sieve(limit),
    }
}
