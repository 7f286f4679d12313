//! Cross-expression verification of resolved bases

use crate::error::SolveError;
use crate::response::Verification;
use crate::semantic::Expression;
use num_bigint::BigUint;
use std::collections::HashMap;
use tracing::debug;

/// Targets are `u64`, so a product wider than this can never match one
const MAX_TARGET_BITS: u64 = 64;

/// Recompute every expression from the bases resolved in `expressions[0]`.
///
/// Each letter takes the base of the same-named letter of the combined
/// expression; the product of `base^exponent` must equal the declared target
/// exactly. The combined expression is checked against itself as well.
///
/// Bases are written into each expression as it is processed, so on failure
/// the expressions before the failing one are already filled in.
///
/// A power is only partly multiplied in once the running product is wider
/// than any target can be. In that case the `actual` of the resulting
/// [`SolveError::SumMismatch`] is a lower bound on the true product.
pub fn verify(expressions: &mut [Expression]) -> Result<Vec<Verification>, SolveError> {
    let resolved: HashMap<String, Option<u64>> = match expressions.first() {
        Some(combined) => combined
            .letters
            .iter()
            .map(|l| (l.name.clone(), l.base))
            .collect(),
        None => {
            return Err(SolveError::Engine(
                "Cannot verify an empty expression list".to_string(),
            ))
        }
    };

    let mut verifications = Vec::with_capacity(expressions.len());

    for (index, expression) in expressions.iter_mut().enumerate() {
        let mut product = BigUint::from(1u32);

        for letter in expression.letters.iter_mut() {
            let base = resolved
                .get(&letter.name)
                .copied()
                .flatten()
                .ok_or_else(|| SolveError::UnmatchedLetter(letter.name.clone()))?;

            multiply_power(&mut product, base, letter.exponent);
            letter.base = Some(base);
        }

        let expected = expression.target.value;
        if product != BigUint::from(expected) {
            debug!(index, expected, actual = %product, "product mismatch");
            return Err(SolveError::SumMismatch {
                expression: index,
                expected,
                actual: product,
            });
        }

        debug!(index, %product, "verified");
        verifications.push(Verification {
            expression: index,
            label: expression.label.clone(),
            product,
            target: expected,
        });
    }

    Ok(verifications)
}

/// Multiply `base^exponent` into `product`, stopping early once it no longer
/// fits a target.
fn multiply_power(product: &mut BigUint, base: u64, exponent: u32) {
    if let Some(power) = base.checked_pow(exponent) {
        *product *= power;
        return;
    }

    // base >= 2 here, so each step at least doubles a nonzero product
    for _ in 0..exponent {
        if product.bits() == 0 || product.bits() > MAX_TARGET_BITS {
            break;
        }
        *product *= base;
    }
}
