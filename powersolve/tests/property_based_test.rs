use powersolve::{factorize, solve, Expression, Puzzle, SolveError, PRIME_TABLE};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_factorize_multiplies_back(
        picks in prop::collection::vec((0usize..PRIME_TABLE.len(), 1u32..4), 1..6)
    ) {
        let value = picks.iter().try_fold(1u64, |acc, (index, exponent)| {
            acc.checked_mul(PRIME_TABLE[*index].checked_pow(*exponent)?)
        });
        prop_assume!(value.is_some_and(|v| v > 1));
        let value = value.unwrap();

        let factors = factorize(value).unwrap();
        let rebuilt = factors
            .iter()
            .fold(1u64, |acc, (prime, exponent)| acc * prime.pow(*exponent));
        prop_assert_eq!(rebuilt, value);
        prop_assert!(factors.keys().all(|p| PRIME_TABLE.contains(p)));
    }

    #[test]
    fn prop_values_above_table_are_unfactorizable(multiplier in 1u64..1000) {
        // 127 is the first prime past the table
        let value = 127 * multiplier;
        match factorize(value) {
            Err(SolveError::Unfactorizable { value: reported, remainder }) => {
                prop_assert_eq!(reported, value);
                prop_assert_eq!(remainder % 127, 0);
            }
            other => prop_assert!(false, "Expected Unfactorizable, got {:?}", other),
        }
    }

    #[test]
    fn prop_consistent_puzzles_solve_exactly(
        exponents in Just(vec![1u32, 2, 3, 4, 5]).prop_shuffle(),
        primes in Just(vec![2u64, 3, 5, 7, 11]).prop_shuffle(),
        splits in prop::collection::vec(0u32..=5, 5),
    ) {
        let names = ["a", "b", "c", "d", "e"];
        let mut first = Expression::new(1);
        let mut second = Expression::new(1);
        let mut first_target = 1u64;
        let mut second_target = 1u64;

        for i in 0..names.len() {
            let left = splits[i].min(exponents[i]);
            let right = exponents[i] - left;
            if left > 0 {
                first = first.term(names[i], left);
                first_target *= primes[i].pow(left);
            }
            if right > 0 {
                second = second.term(names[i], right);
                second_target *= primes[i].pow(right);
            }
        }
        first.target.value = first_target;
        second.target.value = second_target;

        let mut puzzle = Puzzle::derive("generated", vec![first, second]).unwrap();
        let solution = solve(&mut puzzle).unwrap();

        for i in 0..names.len() {
            prop_assert_eq!(solution.base_of(names[i]), Some(primes[i]));
        }
        for expression in &puzzle.expressions {
            let product: u64 = expression
                .letters
                .iter()
                .map(|l| l.base.unwrap().pow(l.exponent))
                .product();
            prop_assert_eq!(product, expression.target.value);
        }
    }
}
