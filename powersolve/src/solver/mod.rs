//! Puzzle solving
//!
//! Solves a puzzle by:
//! 1. Factorizing the combined target over the prime table
//! 2. Matching primes to combined letters by exponent
//! 3. Verifying every expression against the resolved bases
//!
//! The first failing stage ends the solve; later stages never run.

pub mod factorize;
pub mod matching;
pub mod verify;

pub use factorize::{factorize, PrimeFactorMap, PRIME_TABLE};
pub use matching::match_combined;
pub use verify::verify;

use crate::response::{Solution, SolveStep, SolvedLetter};
use crate::semantic::Puzzle;
use crate::{SolveError, SolveResult};
use tracing::{debug, info};

/// Solve `puzzle` in place.
///
/// On success every letter of every expression carries its resolved base. On
/// failure the puzzle keeps whatever was assigned before the failing step.
pub fn solve(puzzle: &mut Puzzle) -> SolveResult<Solution> {
    let mut solution = Solution::new(puzzle.name.clone());

    let target = puzzle
        .combined()
        .map(|c| c.target.value)
        .ok_or_else(|| {
            SolveError::Engine(format!("Puzzle '{}' has no expressions", puzzle.name))
        })?;

    debug!(puzzle = %puzzle.name, target, "solving");

    let factors = factorize(target)?;
    solution.add_step(SolveStep::Factorized {
        value: target,
        factors: factors.clone(),
    });

    let combined = &mut puzzle.expressions[0];
    for assignment in match_combined(&factors, combined)? {
        solution.add_step(SolveStep::Assigned(assignment));
    }

    for verification in verify(&mut puzzle.expressions)? {
        solution.add_step(SolveStep::Verified(verification));
    }

    solution.factors = factors;
    solution.letters = puzzle.expressions[0]
        .letters
        .iter()
        .filter_map(|l| {
            l.base.map(|base| SolvedLetter {
                name: l.name.clone(),
                exponent: l.exponent,
                base,
            })
        })
        .collect();
    solution.expressions = puzzle.expressions.clone();

    info!(
        puzzle = %puzzle.name,
        letters = solution.letters.len(),
        "solved"
    );
    Ok(solution)
}
