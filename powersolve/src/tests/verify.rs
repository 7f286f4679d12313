use super::worked_example;
use crate::{verify, Expression, SolveError, Target};
use num_bigint::BigUint;

fn solved(combined: Expression, bases: &[(&str, u64)]) -> Expression {
    let mut combined = combined;
    for (name, base) in bases {
        combined.letter_mut(name).unwrap().base = Some(*base);
    }
    combined
}

const WORKED_BASES: [(&str, u64); 7] = [
    ("a", 2),
    ("b", 3),
    ("c", 5),
    ("d", 7),
    ("e", 11),
    ("f", 13),
    ("g", 17),
];

#[test]
fn test_verify_worked_example() {
    let mut puzzle = worked_example();
    puzzle.expressions[0] = solved(puzzle.expressions[0].clone(), &WORKED_BASES);

    let verifications = verify(&mut puzzle.expressions).unwrap();
    let products: Vec<BigUint> = verifications.iter().map(|v| v.product.clone()).collect();
    assert_eq!(
        products,
        vec![
            BigUint::from(2_677_277_333_530_800_000u64),
            BigUint::from(5100u32),
            BigUint::from(33462u32),
            BigUint::from(17150u32),
            BigUint::from(914760u32),
        ]
    );
}

#[test]
fn test_verify_propagates_bases_into_sub_expressions() {
    let mut puzzle = worked_example();
    puzzle.expressions[0] = solved(puzzle.expressions[0].clone(), &WORKED_BASES);

    verify(&mut puzzle.expressions).unwrap();

    let third = &puzzle.expressions[3];
    assert_eq!(third.letter("a").unwrap().base, Some(2));
    assert_eq!(third.letter("c").unwrap().base, Some(5));
    assert_eq!(third.letter("d").unwrap().base, Some(7));
    assert!(puzzle.expressions.iter().all(Expression::is_solved));
}

#[test]
fn test_verify_off_by_one_product_is_a_mismatch() {
    let combined = solved(Expression::new(4).term("a", 2), &[("a", 2)]);
    let mut expressions = vec![combined, Expression::new(5).term("a", 2)];

    match verify(&mut expressions) {
        Err(SolveError::SumMismatch {
            expression,
            expected,
            actual,
        }) => {
            assert_eq!(expression, 1);
            assert_eq!(expected, 5);
            assert_eq!(actual, BigUint::from(4u32));
        }
        other => panic!("Expected SumMismatch, got {:?}", other),
    }
}

#[test]
fn test_verify_large_product_compared_exactly() {
    // 2677277333530800001 and 2677277333530800000 are the same f64
    let mut puzzle = worked_example();
    puzzle.expressions[0] = solved(puzzle.expressions[0].clone(), &WORKED_BASES);
    puzzle.expressions[0].target = Target::new(2_677_277_333_530_800_001);

    match verify(&mut puzzle.expressions) {
        Err(SolveError::SumMismatch {
            expression,
            expected,
            actual,
        }) => {
            assert_eq!(expression, 0);
            assert_eq!(expected, 2_677_277_333_530_800_001);
            assert_eq!(actual, BigUint::from(2_677_277_333_530_800_000u64));
        }
        other => panic!("Expected SumMismatch, got {:?}", other),
    }
}

#[test]
fn test_verify_huge_exponent_stops_past_target_width() {
    let combined = solved(Expression::new(2).term("a", 1), &[("a", 2)]);
    let mut expressions = vec![combined, Expression::new(2).term("a", 400_000_000)];

    match verify(&mut expressions) {
        Err(SolveError::SumMismatch {
            expression,
            expected,
            actual,
        }) => {
            assert_eq!(expression, 1);
            assert_eq!(expected, 2);
            assert!(actual.bits() > 64);
            assert!(actual.bits() <= 128);
        }
        other => panic!("Expected SumMismatch, got {:?}", other),
    }
    assert_eq!(expressions[1].letters[0].base, Some(2));
}

#[test]
fn test_verify_zero_base_after_wide_power_is_exact() {
    let combined = solved(
        Expression::new(0).term("a", 1).term("z", 1),
        &[("a", 3), ("z", 0)],
    );
    let sub = Expression::new(0).term("a", u32::MAX).term("z", 1);
    let mut expressions = vec![combined, sub];

    let verifications = verify(&mut expressions).unwrap();
    assert_eq!(verifications[1].product, BigUint::from(0u32));
}

#[test]
fn test_verify_ignores_target_exponent() {
    let combined = solved(
        Expression::with_target(Target::new(12).with_exponent(0))
            .term("a", 2)
            .term("b", 1),
        &[("a", 2), ("b", 3)],
    );
    let sub = Expression::with_target(Target::new(12).with_exponent(7))
        .term("a", 2)
        .term("b", 1);
    let mut expressions = vec![combined, sub];

    let verifications = verify(&mut expressions).unwrap();
    assert_eq!(verifications.len(), 2);
    assert!(verifications.iter().all(|v| v.product == BigUint::from(12u32)));
}

#[test]
fn test_verify_unassigned_combined_letter() {
    let combined = Expression::new(6).term("x", 1).term("y", 1);
    let mut expressions = vec![solved(combined, &[("x", 2)])];

    match verify(&mut expressions) {
        Err(SolveError::UnmatchedLetter(name)) => assert_eq!(name, "y"),
        other => panic!("Expected UnmatchedLetter, got {:?}", other),
    }
}

#[test]
fn test_verify_letter_missing_from_combined() {
    let combined = solved(Expression::new(2).term("x", 1), &[("x", 2)]);
    let mut expressions = vec![combined, Expression::new(6).term("x", 1).term("q", 1)];

    match verify(&mut expressions) {
        Err(SolveError::UnmatchedLetter(name)) => assert_eq!(name, "q"),
        other => panic!("Expected UnmatchedLetter, got {:?}", other),
    }
}

#[test]
fn test_verify_empty_expression_list() {
    let mut expressions: Vec<Expression> = Vec::new();
    assert!(matches!(
        verify(&mut expressions),
        Err(SolveError::Engine(_))
    ));
}
