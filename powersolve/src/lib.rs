//! # Powersolve Engine
//!
//! **Letters from products**
//!
//! Powersolve recovers the integer value of every letter in a set of
//! product-of-powers equations such as `a^2 * b * c^2 * g = 5100`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use powersolve::{Engine, SolveResult};
//!
//! fn main() -> SolveResult<()> {
//!     let mut engine = Engine::new();
//!
//!     engine.add_puzzle_code(r#"
//!         puzzle small
//!           a = 2
//!           b^2 = 9
//!           c^3 = 125
//!     "#, "small.puzzle")?;
//!
//!     let solution = engine.solve("small")?;
//!     assert_eq!(solution.base_of("c"), Some(5));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Expressions
//! An expression is a list of letters, each raised to a fixed exponent, whose
//! product equals a declared target.
//!
//! ### The combined expression
//! The first expression of a puzzle multiplies all the others together: its
//! letters are the union of every letter, exponents summed, and its target is
//! the product of every target. When a puzzle file leaves it out, it is
//! derived.
//!
//! ### Solving
//! The combined target is factorized over a fixed prime table, each prime is
//! handed to the first unassigned letter whose exponent matches, and every
//! expression is then recomputed with the resolved bases and compared with
//! its target.

pub mod ast;
pub mod engine;
pub mod error;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod semantic;
pub mod serializers;
pub mod solver;
pub mod validator;

pub use ast::Span;
pub use engine::Engine;
pub use error::SolveError;
pub use parser::{parse, parse_expression};
pub use resource_limits::ResourceLimits;
pub use response::{Assignment, Solution, SolveStep, SolvedLetter, Verification};
pub use semantic::*;
pub use solver::{factorize, match_combined, solve, verify, PrimeFactorMap, PRIME_TABLE};
pub use validator::{ValidatedPuzzles, Validator};

/// Result type for Powersolve operations
pub type SolveResult<T> = Result<T, SolveError>;

#[cfg(test)]
mod tests;
