#![no_main]

use libfuzzer_sys::fuzz_target;
use powersolve::{solve, Expression, Puzzle};

// Arbitrary (target, exponents) expressions must never panic the solver
fuzz_target!(|data: Vec<(u32, Vec<u8>)>| {
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let subs: Vec<Expression> = data
        .into_iter()
        .take(8)
        .map(|(target, exponents)| {
            exponents
                .into_iter()
                .zip(names.iter())
                .fold(Expression::new(u64::from(target)), |e, (exp, name)| {
                    e.term(*name, u32::from(exp % 8))
                })
        })
        .collect();

    if let Ok(mut puzzle) = Puzzle::derive("fuzz", subs) {
        let _ = solve(&mut puzzle);
    }
});
