use crate::semantic::Expression;
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A prime handed to a letter of the combined expression by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub letter: String,
    pub prime: u64,
    pub exponent: u32,
}

/// Outcome of recomputing one expression with the resolved bases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Position in the puzzle's expression list (0 is the combined expression)
    pub expression: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(serialize_with = "serialize_display")]
    pub product: BigUint,
    pub target: u64,
}

/// A resolved letter of the combined expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolvedLetter {
    pub name: String,
    pub exponent: u32,
    pub base: u64,
}

/// One step of a solve, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SolveStep {
    Factorized {
        value: u64,
        factors: BTreeMap<u64, u32>,
    },
    Assigned(Assignment),
    Verified(Verification),
}

/// Result of solving a puzzle
///
/// Holds the resolved letters, every expression with its bases filled in, and
/// the trace of steps that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub puzzle_name: String,
    pub factors: BTreeMap<u64, u32>,
    pub letters: Vec<SolvedLetter>,
    pub expressions: Vec<Expression>,
    pub steps: Vec<SolveStep>,
}

impl Solution {
    pub fn new(puzzle_name: impl Into<String>) -> Self {
        Self {
            puzzle_name: puzzle_name.into(),
            factors: BTreeMap::new(),
            letters: Vec::new(),
            expressions: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn add_step(&mut self, step: SolveStep) {
        self.steps.push(step);
    }

    /// Resolved base of a letter, if the solution contains it
    pub fn base_of(&self, name: &str) -> Option<u64> {
        self.letters
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.base)
    }

    pub fn verifications(&self) -> impl Iterator<Item = &Verification> {
        self.steps.iter().filter_map(|step| match step {
            SolveStep::Verified(v) => Some(v),
            _ => None,
        })
    }
}

fn serialize_display<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
