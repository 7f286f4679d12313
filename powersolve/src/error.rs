use crate::ast::Span;
use num_bigint::BigUint;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub puzzle_name: String,
    pub puzzle_start_line: usize,
    pub suggestion: Option<String>,
}

/// Error types for the Powersolve system
#[derive(Debug, Clone)]
pub enum SolveError {
    /// The value handed to the factorizer has no meaningful factorization (0 or 1)
    InvalidInput(u64),

    /// Trial division over the prime table left a remainder other than 1
    Unfactorizable { value: u64, remainder: u64 },

    /// No unassigned letter of the combined expression carries this exponent
    NoMatchFound { prime: u64, exponent: u32 },

    /// A letter has no resolved base when verification reaches it
    UnmatchedLetter(String),

    /// The recomputed product of an expression differs from its declared target
    SumMismatch {
        expression: usize,
        expected: u64,
        actual: BigUint,
    },

    /// Parse error with source location
    Parse(Box<ErrorDetails>),

    /// Semantic validation error with source location
    Semantic(Box<ErrorDetails>),

    /// Engine error without specific source location
    Engine(String),

    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Multiple errors collected together
    MultipleErrors(Vec<SolveError>),
}

impl SolveError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: None,
        }))
    }

    /// Create a semantic error with source information
    pub fn semantic(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
    ) -> Self {
        Self::Semantic(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: None,
        }))
    }

    /// Create a semantic error with suggestion
    pub fn semantic_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        puzzle_name: impl Into<String>,
        puzzle_start_line: usize,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Semantic(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            puzzle_name: puzzle_name.into(),
            puzzle_start_line,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// True for the failures produced by the solving pipeline itself
    pub fn is_solve_failure(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidInput(_)
                | SolveError::Unfactorizable { .. }
                | SolveError::NoMatchFound { .. }
                | SolveError::UnmatchedLetter(_)
                | SolveError::SumMismatch { .. }
        )
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidInput(value) => {
                write!(f, "Invalid input: cannot prime factorize a value of {}", value)
            }
            SolveError::Unfactorizable { value, remainder } => write!(
                f,
                "Unfactorizable: {} leaves {} after dividing out every table prime",
                value, remainder
            ),
            SolveError::NoMatchFound { prime, exponent } => {
                write!(f, "No match found for {}^{}", prime, exponent)
            }
            SolveError::UnmatchedLetter(name) => write!(f, "Unmatched letter '{}'", name),
            SolveError::SumMismatch {
                expression,
                expected,
                actual,
            } => write!(
                f,
                "Product mismatch in expression {}: expected {}, got {}",
                expression, expected, actual
            ),
            SolveError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(
                    f,
                    " at {}:{}:{}",
                    details.source_id, details.span.line, details.span.col
                )
            }
            SolveError::Semantic(details) => {
                write!(f, "Semantic error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(
                    f,
                    " at {}:{}:{}",
                    details.source_id, details.span.line, details.span.col
                )
            }
            SolveError::Engine(msg) => write!(f, "Engine error: {}", msg),
            SolveError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit {}, actual {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
            SolveError::MultipleErrors(errors) => {
                writeln!(f, "Multiple errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, error)?;
                    if i < errors.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SolveError {}

