use crate::{Expression, Letter, Puzzle, SolveError, Target};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PuzzleJson {
    name: String,
    expressions: Vec<ExpressionJson>,
    #[serde(default)]
    combined: Option<ExpressionJson>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExpressionJson {
    #[serde(default)]
    label: Option<String>,
    letters: Vec<LetterJson>,
    target: u64,
    /// Exponent annotation on the target; accepted and ignored by the solver
    #[serde(default = "default_target_exponent")]
    target_exponent: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LetterJson {
    name: String,
    #[serde(default = "default_exponent")]
    exponent: u32,
}

fn default_exponent() -> u32 {
    1
}

fn default_target_exponent() -> u32 {
    1
}

impl From<ExpressionJson> for Expression {
    fn from(json: ExpressionJson) -> Self {
        let target = Target::new(json.target).with_exponent(json.target_exponent);
        let mut expression = Expression::with_target(target);
        if let Some(label) = json.label {
            expression = expression.with_label(label);
        }
        for letter in json.letters {
            expression = expression.add_letter(Letter::new(letter.name, letter.exponent));
        }
        expression
    }
}

/// Read a puzzle from JSON.
///
/// ```json
/// { "name": "small",
///   "expressions": [ { "letters": [{ "name": "a", "exponent": 2 }], "target": 9 } ] }
/// ```
///
/// When `combined` is absent it is derived from `expressions`.
pub fn to_puzzle(json: &str) -> Result<Puzzle, SolveError> {
    let parsed: PuzzleJson = serde_json::from_str(json)
        .map_err(|e| SolveError::Engine(format!("Invalid puzzle JSON: {}", e)))?;

    let sub_expressions: Vec<Expression> =
        parsed.expressions.into_iter().map(Expression::from).collect();

    match parsed.combined {
        Some(combined) => {
            let mut combined = Expression::from(combined);
            if combined.label.is_none() {
                combined = combined.with_label("combined");
            }
            Ok(Puzzle::from_parts(parsed.name, combined, sub_expressions))
        }
        None => Puzzle::derive(parsed.name, sub_expressions),
    }
}
