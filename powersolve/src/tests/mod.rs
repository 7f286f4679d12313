use crate::{Expression, Puzzle};

mod verify;



/// a^7 * b^6 * c^5 * d^4 * e^3 * f^2 * g = 2677277333530800000 and its four factors
pub(crate) fn worked_example() -> Puzzle {
    let combined = Expression::new(2_677_277_333_530_800_000)
        .term("a", 7)
        .term("b", 6)
        .term("c", 5)
        .term("d", 4)
        .term("e", 3)
        .term("f", 2)
        .term("g", 1);

    Puzzle::from_parts("worked", combined, worked_sub_expressions())
}

pub(crate) fn worked_sub_expressions() -> Vec<Expression> {
    vec![
        Expression::new(5100)
            .term("a", 2)
            .term("b", 1)
            .term("c", 2)
            .term("g", 1),
        Expression::new(33462)
            .term("a", 1)
            .term("b", 2)
            .term("e", 1)
            .term("f", 2),
        Expression::new(17150)
            .term("a", 1)
            .term("c", 2)
            .term("d", 3),
        Expression::new(914760)
            .term("a", 3)
            .term("b", 3)
            .term("c", 1)
            .term("d", 1)
            .term("e", 2),
    ]
}
