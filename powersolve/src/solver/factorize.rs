//! Trial division over a fixed prime table

use crate::error::SolveError;
use std::collections::BTreeMap;
use tracing::debug;

/// Prime → exponent, iterated in ascending prime order
pub type PrimeFactorMap = BTreeMap<u64, u32>;

/// The candidate primes tried by [`factorize`], ascending.
///
/// Values with a prime factor above the last entry are reported as
/// [`SolveError::Unfactorizable`].
pub const PRIME_TABLE: [u64; 30] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113,
];

/// Decompose `value` into prime powers using [`PRIME_TABLE`].
///
/// The cursor only advances when the current prime no longer divides the
/// working value, so repeated factors are counted before moving on.
pub fn factorize(value: u64) -> Result<PrimeFactorMap, SolveError> {
    if value <= 1 {
        return Err(SolveError::InvalidInput(value));
    }

    let mut remaining = value;
    let mut index = 0;
    let mut factors = PrimeFactorMap::new();

    while index < PRIME_TABLE.len() && remaining > 0 {
        let prime = PRIME_TABLE[index];
        if remaining % prime == 0 {
            remaining /= prime;
            *factors.entry(prime).or_insert(0) += 1;
        } else {
            index += 1;
        }
    }

    if remaining != 1 {
        debug!(value, remaining, "factorization left a remainder");
        return Err(SolveError::Unfactorizable {
            value,
            remainder: remaining,
        });
    }

    debug!(value, ?factors, "factorized");
    Ok(factors)
}
