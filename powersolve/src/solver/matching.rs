//! Greedy assignment of primes to letters by exponent

use super::PrimeFactorMap;
use crate::error::SolveError;
use crate::response::Assignment;
use crate::semantic::Expression;
use tracing::debug;

/// Hand each prime of `factors` to a letter of `combined` with the same exponent.
///
/// Primes are taken in ascending order and letters in declaration order; the
/// first unassigned letter with a matching exponent takes the prime. There is
/// no backtracking, so when several letters share an exponent the pairing
/// depends on declaration order alone.
///
/// Stops at the first prime without a candidate. Letters assigned before that
/// point keep their bases.
pub fn match_combined(
    factors: &PrimeFactorMap,
    combined: &mut Expression,
) -> Result<Vec<Assignment>, SolveError> {
    let mut assignments = Vec::with_capacity(factors.len());

    for (&prime, &exponent) in factors {
        let letter = combined
            .letters
            .iter_mut()
            .find(|l| l.exponent == exponent && l.base.is_none())
            .ok_or(SolveError::NoMatchFound { prime, exponent })?;

        letter.base = Some(prime);
        debug!(letter = %letter.name, prime, exponent, "assigned");

        assignments.push(Assignment {
            letter: letter.name.clone(),
            prime,
            exponent,
        });
    }

    Ok(assignments)
}
