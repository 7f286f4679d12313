use crate::solver;
use crate::{parse, Puzzle, ResourceLimits, Solution, SolveError, SolveResult, Validator};
use std::collections::HashMap;

/// The Powersolve engine.
///
/// Holds validated puzzles by name and solves them on request. Solving works
/// on a copy, so a stored puzzle can be solved any number of times.
pub struct Engine {
    puzzles: HashMap<String, Puzzle>,
    sources: HashMap<String, String>,
    validator: Validator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            puzzles: HashMap::new(),
            sources: HashMap::new(),
            validator: Validator,
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Parse puzzle text and store every puzzle it defines
    pub fn add_puzzle_code(&mut self, code: &str, source: &str) -> SolveResult<()> {
        let new_puzzles = parse(code, Some(source.to_string()), &self.limits)?;
        self.sources.insert(source.to_string(), code.to_string());
        self.store(new_puzzles)
    }

    /// Store a puzzle built in code (or read from JSON)
    pub fn add_puzzle(&mut self, puzzle: Puzzle) -> SolveResult<()> {
        if puzzle.expressions.len() > self.limits.max_expressions {
            return Err(SolveError::ResourceLimitExceeded {
                limit_name: "max_expressions".to_string(),
                limit_value: self.limits.max_expressions.to_string(),
                actual_value: puzzle.expressions.len().to_string(),
                suggestion: format!("Split puzzle '{}' into smaller puzzles", puzzle.name),
            });
        }
        if let Some(count) = puzzle
            .expressions
            .iter()
            .map(|e| e.letters.len())
            .find(|&count| count > self.limits.max_letters)
        {
            return Err(SolveError::ResourceLimitExceeded {
                limit_name: "max_letters".to_string(),
                limit_value: self.limits.max_letters.to_string(),
                actual_value: count.to_string(),
                suggestion: "Use fewer letters per expression".to_string(),
            });
        }
        self.store(vec![puzzle])
    }

    fn store(&mut self, new_puzzles: Vec<Puzzle>) -> SolveResult<()> {
        // Validate together with what is already loaded so names stay unique
        let mut all_puzzles: Vec<Puzzle> = self.puzzles.values().cloned().collect();
        all_puzzles.extend(new_puzzles);

        let validated = self.validator.validate_all(all_puzzles, &self.sources)?;

        for puzzle in validated.puzzles {
            self.puzzles.insert(puzzle.name.clone(), puzzle);
        }

        Ok(())
    }

    pub fn remove_puzzle(&mut self, name: &str) {
        self.puzzles.remove(name);
    }

    /// Names of all loaded puzzles, sorted
    pub fn list_puzzles(&self) -> Vec<String> {
        let mut names: Vec<String> = self.puzzles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get_puzzle(&self, name: &str) -> Option<&Puzzle> {
        self.puzzles.get(name)
    }

    /// Solve a loaded puzzle
    pub fn solve(&self, name: &str) -> SolveResult<Solution> {
        let mut puzzle = self
            .puzzles
            .get(name)
            .cloned()
            .ok_or_else(|| SolveError::Engine(format!("Puzzle '{}' not found", name)))?;
        solver::solve(&mut puzzle)
    }
}
