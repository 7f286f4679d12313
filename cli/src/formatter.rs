use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use powersolve::{Expression, PrimeFactorMap, Puzzle, Solution};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_solution(&self, solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&format!("Puzzle: {}\n", solution.puzzle_name));
        output.push_str(&format!(
            "Factors: {}\n\n",
            self.format_factor_product(&solution.factors)
        ));

        let mut letters = Table::new();
        letters.load_preset(UTF8_FULL);
        letters.set_header(Row::from(vec![
            Cell::new("Letter").set_alignment(CellAlignment::Left),
            Cell::new("Exponent").set_alignment(CellAlignment::Right),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));
        for letter in &solution.letters {
            letters.add_row(Row::from(vec![
                Cell::new(&letter.name),
                Cell::new(letter.exponent).set_alignment(CellAlignment::Right),
                Cell::new(letter.base).set_alignment(CellAlignment::Right),
            ]));
        }
        output.push_str(&letters.to_string());
        output.push('\n');

        output.push_str(&self.format_checks(&solution.expressions));
        output.push('\n');

        output
    }

    fn format_checks(&self, expressions: &[Expression]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Expression"),
            Cell::new("With values"),
        ]));

        for expression in expressions {
            table.add_row(Row::from(vec![
                Cell::new(expression.to_string()),
                Cell::new(expression.display_solved()),
            ]));
        }

        table.to_string()
    }

    pub fn format_puzzle(&self, puzzle: &Puzzle) -> String {
        let mut output = String::new();

        output.push_str(&format!("Puzzle: {}\n", puzzle.name));
        if let Some(source) = &puzzle.source {
            output.push_str(&format!("Source: {}:{}\n", source, puzzle.start_line));
        }
        output.push('\n');

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Expression"),
        ]));
        for (index, expression) in puzzle.expressions.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(index).set_alignment(CellAlignment::Right),
                Cell::new(expression.to_string()),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    pub fn format_workspace_summary(
        &self,
        file_count: usize,
        puzzle_count: usize,
        stats: &[(String, usize, usize)],
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Found {} puzzle(s) in {} file(s)\n\n",
            puzzle_count, file_count
        ));

        if stats.is_empty() {
            return output;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Puzzle"),
            Cell::new("Expressions").set_alignment(CellAlignment::Right),
            Cell::new("Letters").set_alignment(CellAlignment::Right),
        ]));
        for (name, expressions, letters) in stats {
            table.add_row(Row::from(vec![
                Cell::new(name),
                Cell::new(expressions).set_alignment(CellAlignment::Right),
                Cell::new(letters).set_alignment(CellAlignment::Right),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    pub fn format_factors(&self, value: u64, factors: &PrimeFactorMap) -> String {
        let mut output = format!("{} = {}\n\n", value, self.format_factor_product(factors));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Prime").set_alignment(CellAlignment::Right),
            Cell::new("Exponent").set_alignment(CellAlignment::Right),
        ]));
        for (prime, exponent) in factors {
            table.add_row(Row::from(vec![
                Cell::new(prime).set_alignment(CellAlignment::Right),
                Cell::new(exponent).set_alignment(CellAlignment::Right),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }

    fn format_factor_product(&self, factors: &PrimeFactorMap) -> String {
        factors
            .iter()
            .map(|(prime, exponent)| {
                if *exponent == 1 {
                    prime.to_string()
                } else {
                    format!("{}^{}", prime, exponent)
                }
            })
            .collect::<Vec<_>>()
            .join(" * ")
    }
}
