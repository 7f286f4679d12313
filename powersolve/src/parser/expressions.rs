use super::{ParseContext, Rule};
use crate::ast::Span;
use crate::error::SolveError;
use crate::semantic::{Expression, Letter, Target};
use pest::iterators::Pair;

/// Parse one expression line, returning whether it was marked `combined`
pub(crate) fn parse_expression_line(
    pair: Pair<Rule>,
    ctx: &ParseContext,
) -> Result<(bool, Expression), SolveError> {
    let mut is_combined = false;
    let mut label: Option<String> = None;
    let mut expression: Option<Expression> = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::combined_marker => is_combined = true,
            Rule::label => label = Some(inner_pair.as_str().to_string()),
            Rule::expression => expression = Some(parse_expression(inner_pair, ctx)?),
            _ => {}
        }
    }

    let mut expression = expression
        .ok_or_else(|| SolveError::Engine("Expression line without an expression".to_string()))?;

    if let Some(label) = label {
        expression = expression.with_label(label);
    } else if is_combined {
        expression = expression.with_label("combined");
    }

    Ok((is_combined, expression))
}

pub(crate) fn parse_expression(
    pair: Pair<Rule>,
    ctx: &ParseContext,
) -> Result<Expression, SolveError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut letters = Vec::new();
    let mut target: Option<Target> = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::term => letters.push(parse_term(inner_pair, ctx)?),
            Rule::target => {
                let target_span = Span::from_pest_span(inner_pair.as_span());
                let value = inner_pair.as_str().parse::<u64>().map_err(|_| {
                    ctx.error(
                        format!(
                            "Target '{}' does not fit in a 64-bit unsigned integer",
                            inner_pair.as_str()
                        ),
                        target_span.clone(),
                    )
                })?;
                target = Some(Target::new(value).with_span(target_span));
            }
            _ => {}
        }
    }

    if letters.len() > ctx.limits.max_letters {
        return Err(SolveError::ResourceLimitExceeded {
            limit_name: "max_letters".to_string(),
            limit_value: ctx.limits.max_letters.to_string(),
            actual_value: letters.len().to_string(),
            suggestion: "Use fewer letters per expression".to_string(),
        });
    }

    let target = target.ok_or_else(|| ctx.error("Expression has no target", span.clone()))?;

    let mut expression = Expression::with_target(target).with_span(span);
    for letter in letters {
        expression = expression.add_letter(letter);
    }
    Ok(expression)
}

fn parse_term(pair: Pair<Rule>, ctx: &ParseContext) -> Result<Letter, SolveError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut name: Option<String> = None;
    let mut exponent: u32 = 1;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::identifier => name = Some(inner_pair.as_str().to_string()),
            Rule::exponent => {
                exponent = inner_pair.as_str().parse::<u32>().map_err(|_| {
                    ctx.error(
                        format!("Exponent '{}' is too large", inner_pair.as_str()),
                        Span::from_pest_span(inner_pair.as_span()),
                    )
                })?;
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ctx.error("Term without a letter", span.clone()))?;
    Ok(Letter::new(name, exponent).with_span(span))
}
