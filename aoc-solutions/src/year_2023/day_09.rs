//! Mirage maintenance: extrapolate sequences through their difference tables

use aoc_parser::{expect_end, parse_integers, parse_lines};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["parser", "sequences"])]
pub struct Solver;

fn parse_history(line: &str) -> Result<Vec<i64>, aoc_parser::ParseError> {
    let (values, cursor) = parse_integers(line, 0)?;
    expect_end(line, cursor)?;
    Ok(values)
}

/// Rows of successive differences, ending with the first all-zero row
pub fn difference_table(values: &[i64]) -> Vec<Vec<i64>> {
    let mut table = vec![values.to_vec()];

    while let Some(row) = table.last().filter(|row| row.iter().any(|&v| v != 0)) {
        let next = row.windows(2).map(|pair| pair[1] - pair[0]).collect();
        table.push(next);
    }

    table
}

/// The values one step after the end and one step before the start
pub fn extrapolate(values: &[i64]) -> (i64, i64) {
    let table = difference_table(values);

    let next = table.iter().filter_map(|row| row.last()).sum();
    let prior = table
        .iter()
        .rev()
        .filter_map(|row| row.first())
        .fold(0, |below, &first| first - below);

    (next, prior)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_lines(input, parse_history)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().map(|values| extrapolate(values).0).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().map(|values| extrapolate(values).1).sum();
        Ok(total.to_string())
    }
}
