use crate::{Expression, Puzzle, SolveError, SolveResult, Span};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Puzzles that have passed semantic validation
#[derive(Debug, Clone)]
pub struct ValidatedPuzzles {
    pub puzzles: Vec<Puzzle>,
}

/// Structural checks run after parsing and before any puzzle is stored.
///
/// The solver never calls this; a puzzle built by hand can be solved without
/// it and will then fail (or not) on its own terms.
#[derive(Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate all puzzles. `sources` maps source ids to their text for error reports.
    pub fn validate_all(
        &self,
        puzzles: Vec<Puzzle>,
        sources: &HashMap<String, String>,
    ) -> SolveResult<ValidatedPuzzles> {
        self.validate_names(&puzzles, sources)?;

        for puzzle in &puzzles {
            let reporter = Reporter::new(puzzle, sources);
            self.validate_shape(puzzle, &reporter)?;
            self.validate_duplicate_letters(puzzle, &reporter)?;
            self.validate_combined(puzzle, &reporter)?;
        }

        Ok(ValidatedPuzzles { puzzles })
    }

    fn validate_names(
        &self,
        puzzles: &[Puzzle],
        sources: &HashMap<String, String>,
    ) -> SolveResult<()> {
        let mut seen: HashMap<&str, &Puzzle> = HashMap::new();
        for puzzle in puzzles {
            if let Some(first) = seen.get(puzzle.name.as_str()) {
                let reporter = Reporter::new(puzzle, sources);
                return Err(reporter.error(
                    format!("Duplicate puzzle name: '{}'", puzzle.name),
                    None,
                    Some(format!(
                        "Puzzle '{}' was already defined in {} at line {}",
                        puzzle.name,
                        first.source.as_deref().unwrap_or("<input>"),
                        first.start_line
                    )),
                ));
            }
            seen.insert(&puzzle.name, puzzle);
        }
        Ok(())
    }

    fn validate_shape(&self, puzzle: &Puzzle, reporter: &Reporter) -> SolveResult<()> {
        if puzzle.sub_expressions().is_empty() {
            return Err(reporter.error(
                format!("Puzzle '{}' has no expressions to solve", puzzle.name),
                None,
                Some("Add at least one line such as 'a^2 * b = 12'".to_string()),
            ));
        }
        Ok(())
    }

    fn validate_duplicate_letters(&self, puzzle: &Puzzle, reporter: &Reporter) -> SolveResult<()> {
        for expression in &puzzle.expressions {
            let mut names: HashSet<&str> = HashSet::new();
            for letter in &expression.letters {
                if !names.insert(&letter.name) {
                    return Err(reporter.error(
                        format!("Letter '{}' appears more than once in '{}'", letter.name, expression),
                        letter.span.clone(),
                        Some(format!(
                            "Merge the occurrences into a single term, e.g. '{}^n'",
                            letter.name
                        )),
                    ));
                }
            }
        }
        Ok(())
    }

    /// The combined expression must be the product of the sub-expressions
    fn validate_combined(&self, puzzle: &Puzzle, reporter: &Reporter) -> SolveResult<()> {
        let Some(combined) = puzzle.combined() else {
            return Ok(());
        };
        let subs = puzzle.sub_expressions();
        let mut errors = Vec::new();

        for expression in subs {
            for letter in &expression.letters {
                if combined.letter(&letter.name).is_none() {
                    errors.push(reporter.error(
                        format!(
                            "Letter '{}' is missing from the combined expression",
                            letter.name
                        ),
                        letter.span.clone(),
                        None,
                    ));
                }
            }
        }

        for letter in &combined.letters {
            let expected: u64 = subs
                .iter()
                .filter_map(|e| e.letter(&letter.name))
                .map(|l| u64::from(l.exponent))
                .sum();
            if u64::from(letter.exponent) != expected {
                errors.push(reporter.error(
                    format!(
                        "Combined exponent of '{}' is {}, but the expressions sum to {}",
                        letter.name, letter.exponent, expected
                    ),
                    letter.span.clone(),
                    Some(format!("Write '{}^{}'", letter.name, expected)),
                ));
            }
        }

        let expected_target = product_of_targets(subs);
        if expected_target != Some(u128::from(combined.target.value)) {
            let expected = expected_target
                .map(|t| t.to_string())
                .unwrap_or_else(|| "a value beyond 128 bits".to_string());
            errors.push(reporter.error(
                format!(
                    "Combined target is {}, but the expression targets multiply to {}",
                    combined.target.value, expected
                ),
                combined.target.span.clone(),
                None,
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SolveError::MultipleErrors(errors)),
        }
    }
}

fn product_of_targets(expressions: &[Expression]) -> Option<u128> {
    expressions
        .iter()
        .try_fold(1u128, |acc, e| acc.checked_mul(u128::from(e.target.value)))
}

/// Builds semantic errors pointing into a puzzle's source
struct Reporter<'a> {
    puzzle: &'a Puzzle,
    source_id: String,
    source_text: Arc<str>,
}

impl<'a> Reporter<'a> {
    fn new(puzzle: &'a Puzzle, sources: &HashMap<String, String>) -> Self {
        let source_id = puzzle
            .source
            .clone()
            .unwrap_or_else(|| "<input>".to_string());
        let source_text = sources
            .get(&source_id)
            .map(|s| Arc::from(s.as_str()))
            .unwrap_or_else(|| Arc::from(""));
        Self {
            puzzle,
            source_id,
            source_text,
        }
    }

    fn error(
        &self,
        message: String,
        span: Option<Span>,
        suggestion: Option<String>,
    ) -> SolveError {
        let span = span.unwrap_or(Span {
            start: 0,
            end: 0,
            line: self.puzzle.start_line,
            col: 1,
        });
        match suggestion {
            Some(suggestion) => SolveError::semantic_with_suggestion(
                message,
                span,
                self.source_id.clone(),
                self.source_text.clone(),
                self.puzzle.name.clone(),
                self.puzzle.start_line,
                suggestion,
            ),
            None => SolveError::semantic(
                message,
                span,
                self.source_id.clone(),
                self.source_text.clone(),
                self.puzzle.name.clone(),
                self.puzzle.start_line,
            ),
        }
    }
}
