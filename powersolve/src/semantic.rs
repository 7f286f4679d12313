use crate::ast::Span;
use crate::error::SolveError;
use serde::Serialize;
use std::fmt;

/// A named unknown raised to a fixed exponent.
///
/// `base` stays `None` until the solver resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    pub name: String,
    pub exponent: u32,
    pub base: Option<u64>,
    #[serde(skip)]
    pub span: Option<Span>,
}

impl Letter {
    pub fn new(name: impl Into<String>, exponent: u32) -> Self {
        Self {
            name: name.into(),
            exponent,
            base: None,
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.base.is_some()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}^{}", self.name, self.exponent)
        }
    }
}

/// The declared product of an expression.
///
/// `exponent` is kept only so inputs that annotate the target with one can be
/// represented faithfully. Nothing in the solver reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub value: u64,
    pub exponent: u32,
    #[serde(skip)]
    pub span: Option<Span>,
}

impl Target {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            exponent: 1,
            span: None,
        }
    }

    pub fn with_exponent(mut self, exponent: u32) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// A product of letters raised to exponents, equal to a declared target.
///
/// Letters keep their declaration order, which is also the order in which the
/// matcher scans them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub letters: Vec<Letter>,
    pub target: Target,
    #[serde(skip)]
    pub span: Option<Span>,
}

impl Expression {
    pub fn new(target: u64) -> Self {
        Self::with_target(Target::new(target))
    }

    pub fn with_target(target: Target) -> Self {
        Self {
            label: None,
            letters: Vec::new(),
            target,
            span: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Append a letter. Uniqueness of names is checked by the validator.
    pub fn add_letter(mut self, letter: Letter) -> Self {
        self.letters.push(letter);
        self
    }

    /// Shorthand for `add_letter(Letter::new(name, exponent))`
    pub fn term(self, name: impl Into<String>, exponent: u32) -> Self {
        self.add_letter(Letter::new(name, exponent))
    }

    pub fn letter(&self, name: &str) -> Option<&Letter> {
        self.letters.iter().find(|l| l.name == name)
    }

    pub fn letter_mut(&mut self, name: &str) -> Option<&mut Letter> {
        self.letters.iter_mut().find(|l| l.name == name)
    }

    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(Letter::is_assigned)
    }

    /// Render with resolved bases in place of letter names, `?` where unresolved
    pub fn display_solved(&self) -> String {
        let terms: Vec<String> = self
            .letters
            .iter()
            .map(|l| {
                let base = l
                    .base
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "?".to_string());
                format!("{}^{}", base, l.exponent)
            })
            .collect();
        format!("{} = {}", terms.join(" * "), self.target.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{}: ", label)?;
        }
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "{}", letter)?;
        }
        write!(f, " = {}", self.target.value)
    }
}

/// A named set of expressions. Element 0 is the combined expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub name: String,
    pub expressions: Vec<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip)]
    pub start_line: usize,
}

impl Puzzle {
    /// Build a puzzle from an explicit combined expression and its sub-expressions
    pub fn from_parts(
        name: impl Into<String>,
        combined: Expression,
        sub_expressions: Vec<Expression>,
    ) -> Self {
        let mut expressions = Vec::with_capacity(sub_expressions.len() + 1);
        expressions.push(combined);
        expressions.extend(sub_expressions);
        Self {
            name: name.into(),
            expressions,
            source: None,
            start_line: 1,
        }
    }

    /// Build a puzzle whose combined expression is derived from the sub-expressions.
    ///
    /// Letters appear in first-appearance order with exponents summed; the
    /// target is the product of every sub-target.
    pub fn derive(
        name: impl Into<String>,
        sub_expressions: Vec<Expression>,
    ) -> Result<Self, SolveError> {
        let name = name.into();
        let combined = combine(&name, &sub_expressions)?;
        Ok(Self::from_parts(name, combined, sub_expressions))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_start_line(mut self, start_line: usize) -> Self {
        self.start_line = start_line;
        self
    }

    pub fn combined(&self) -> Option<&Expression> {
        self.expressions.first()
    }

    pub fn sub_expressions(&self) -> &[Expression] {
        self.expressions.get(1..).unwrap_or(&[])
    }

    /// Names of every letter in the combined expression, in declaration order
    pub fn letter_names(&self) -> Vec<&str> {
        self.combined()
            .map(|c| c.letters.iter().map(|l| l.name.as_str()).collect())
            .unwrap_or_default()
    }
}

fn combine(puzzle_name: &str, sub_expressions: &[Expression]) -> Result<Expression, SolveError> {
    let mut target: u64 = 1;
    let mut letters: Vec<Letter> = Vec::new();

    for expression in sub_expressions {
        target = target.checked_mul(expression.target.value).ok_or_else(|| {
            SolveError::Engine(format!(
                "Combined target of puzzle '{}' overflows a 64-bit integer",
                puzzle_name
            ))
        })?;

        for letter in &expression.letters {
            match letters.iter_mut().find(|l| l.name == letter.name) {
                Some(existing) => {
                    existing.exponent =
                        existing.exponent.checked_add(letter.exponent).ok_or_else(|| {
                            SolveError::Engine(format!(
                                "Combined exponent of '{}' in puzzle '{}' overflows",
                                letter.name, puzzle_name
                            ))
                        })?;
                }
                None => letters.push(Letter::new(letter.name.clone(), letter.exponent)),
            }
        }
    }

    Ok(Expression {
        label: Some("combined".to_string()),
        letters,
        target: Target::new(target),
        span: None,
    })
}
