use crate::ast::Span;
use crate::error::SolveError;
use crate::resource_limits::ResourceLimits;
use crate::semantic::{Expression, Puzzle};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/puzzle.pest"]
pub struct PuzzleParser;

/// Source being parsed, carried along so errors can point into it
pub(crate) struct ParseContext<'a> {
    pub filename: &'a str,
    pub source: Arc<str>,
    pub puzzle_name: String,
    pub puzzle_start_line: usize,
    pub limits: &'a ResourceLimits,
}

impl ParseContext<'_> {
    pub(crate) fn error(&self, message: impl Into<String>, span: Span) -> SolveError {
        SolveError::parse(
            message,
            span,
            self.filename,
            self.source.clone(),
            self.puzzle_name.clone(),
            self.puzzle_start_line,
        )
    }
}

pub fn parse(
    content: &str,
    filename: Option<String>,
    limits: &ResourceLimits,
) -> Result<Vec<Puzzle>, SolveError> {
    if content.len() > limits.max_file_size_bytes {
        return Err(SolveError::ResourceLimitExceeded {
            limit_name: "max_file_size_bytes".to_string(),
            limit_value: format!(
                "{} bytes ({} MB)",
                limits.max_file_size_bytes,
                limits.max_file_size_bytes / (1024 * 1024)
            ),
            actual_value: format!(
                "{} bytes ({:.2} MB)",
                content.len(),
                content.len() as f64 / (1024.0 * 1024.0)
            ),
            suggestion: "Reduce file size or split the puzzles over several files".to_string(),
        });
    }

    let filename = filename.unwrap_or_else(|| "<input>".to_string());
    let source: Arc<str> = Arc::from(content);

    match PuzzleParser::parse(Rule::puzzle_file, content) {
        Ok(pairs) => {
            let mut puzzles = Vec::new();
            for pair in pairs {
                if pair.as_rule() == Rule::puzzle_file {
                    for inner_pair in pair.into_inner() {
                        if inner_pair.as_rule() == Rule::puzzle {
                            puzzles.push(parse_puzzle(inner_pair, &filename, &source, limits)?);
                        }
                    }
                }
            }
            Ok(puzzles)
        }
        Err(e) => {
            let (start, end) = match e.location {
                pest::error::InputLocation::Pos(pos) => (pos, pos),
                pest::error::InputLocation::Span((start, end)) => (start, end),
            };
            let (line, col) = match e.line_col {
                pest::error::LineColLocation::Pos(line_col) => line_col,
                pest::error::LineColLocation::Span(line_col, _) => line_col,
            };
            let pest_span = Span {
                start,
                end,
                line,
                col,
            };

            Err(SolveError::parse(
                e.variant.message().to_string(),
                pest_span,
                filename,
                source,
                "<parse-error>",
                1,
            ))
        }
    }
}

/// Parse a single expression such as `a^2 * b = 12`, outside any puzzle block
pub fn parse_expression(input: &str) -> Result<Expression, SolveError> {
    let input = input.trim();
    let pairs = PuzzleParser::parse(Rule::expression, input).map_err(|e| {
        SolveError::Engine(format!("Failed to parse expression '{}': {}", input, e))
    })?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| SolveError::Engine(format!("No parse result for '{}'", input)))?;

    if pair.as_span().end() != input.len() {
        return Err(SolveError::Engine(format!(
            "Unexpected trailing input in expression '{}'",
            input
        )));
    }

    let limits = ResourceLimits::default();
    let ctx = ParseContext {
        filename: "<expression>",
        source: Arc::from(input),
        puzzle_name: "<expression>".to_string(),
        puzzle_start_line: 1,
        limits: &limits,
    };
    expressions::parse_expression(pair, &ctx)
}

fn parse_puzzle(
    pair: Pair<Rule>,
    filename: &str,
    source: &Arc<str>,
    limits: &ResourceLimits,
) -> Result<Puzzle, SolveError> {
    let start_line = pair.as_span().start_pos().line_col().0;

    let mut ctx = ParseContext {
        filename,
        source: source.clone(),
        puzzle_name: "<unnamed>".to_string(),
        puzzle_start_line: start_line,
        limits,
    };
    let mut combined: Option<Expression> = None;
    let mut sub_expressions = Vec::new();

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::puzzle_declaration => {
                for decl_inner in inner_pair.into_inner() {
                    if decl_inner.as_rule() == Rule::puzzle_name {
                        ctx.puzzle_name = decl_inner.as_str().to_string();
                    }
                }
            }
            Rule::expression_line => {
                let line_span = Span::from_pest_span(inner_pair.as_span());
                let (is_combined, expression) =
                    expressions::parse_expression_line(inner_pair, &ctx)?;

                if is_combined {
                    if combined.is_some() {
                        return Err(ctx.error(
                            format!(
                                "Puzzle '{}' declares more than one combined expression",
                                ctx.puzzle_name
                            ),
                            line_span,
                        ));
                    }
                    combined = Some(expression);
                } else {
                    sub_expressions.push(expression);
                }

                let total = sub_expressions.len() + 1;
                if total > limits.max_expressions {
                    return Err(SolveError::ResourceLimitExceeded {
                        limit_name: "max_expressions".to_string(),
                        limit_value: limits.max_expressions.to_string(),
                        actual_value: total.to_string(),
                        suggestion: format!(
                            "Split puzzle '{}' into smaller puzzles",
                            ctx.puzzle_name
                        ),
                    });
                }
            }
            _ => {}
        }
    }

    let puzzle = match combined {
        Some(combined) => Puzzle::from_parts(ctx.puzzle_name.clone(), combined, sub_expressions),
        None => Puzzle::derive(ctx.puzzle_name.clone(), sub_expressions)?,
    };

    Ok(puzzle
        .with_source(filename.to_string())
        .with_start_line(start_line))
}
