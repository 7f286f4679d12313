use ariadne::{Color, Label, Report, ReportKind, Source};
use powersolve::SolveError;

/// Format a SolveError with fancy terminal output using Ariadne
pub fn format_error(error: &SolveError) -> String {
    match error {
        SolveError::Parse(details) | SolveError::Semantic(details) => {
            let error_type = match error {
                SolveError::Parse(_) => "Parse error",
                _ => "Semantic error",
            };

            let enhanced_message = format!(
                "{}: {} (in puzzle '{}', file {}:{})",
                error_type,
                details.message,
                details.puzzle_name,
                details.source_id,
                details.span.line
            );

            // Validator errors on derived expressions carry no source text to point into
            if details.source_text.is_empty() {
                return match &details.suggestion {
                    Some(suggestion) => format!("{}\n  help: {}", enhanced_message, suggestion),
                    None => enhanced_message,
                };
            }

            let mut output = Vec::new();
            let mut report =
                Report::build(ReportKind::Error, &details.source_id, details.span.start)
                    .with_message(enhanced_message)
                    .with_label(
                        Label::new((&details.source_id, details.span.start..details.span.end))
                            .with_message("")
                            .with_color(Color::Red),
                    );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        SolveError::NoMatchFound { prime, exponent } => format!(
            "No match found: no unassigned letter has exponent {} for prime {}",
            exponent, prime
        ),
        SolveError::SumMismatch {
            expression,
            expected,
            actual,
        } => format!(
            "Product mismatch: expression {} should equal {} but the solved letters give {}",
            expression, expected, actual
        ),
        SolveError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        SolveError::MultipleErrors(errors) => {
            let mut result = String::from("Multiple errors occurred:\n\n");
            for error in errors {
                result.push_str(&format_error(error));
                result.push_str("\n\n");
            }
            result
        }
        other => other.to_string(),
    }
}
