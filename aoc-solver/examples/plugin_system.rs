//! Plugin registration with a cursor-parsed solver
//!
//! Run with: cargo run --example plugin_system

use aoc_parser::{expect, expect_end, parse_integers};
use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

/// `Time:` / `Distance:` tables, answered by brute force
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 6, tags = ["demo", "races"])]
pub struct Races;

fn labelled(line: &str, label: &str) -> Result<Vec<u64>, aoc_parser::ParseError> {
    let cursor = expect(line, 0, label)?;
    let (values, cursor) = parse_integers(line, cursor)?;
    expect_end(line, cursor)?;
    Ok(values)
}

impl AocParser for Races {
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = aoc_parser::lines(input);
        let (Some((n1, time)), Some((n2, distance))) = (lines.next(), lines.next()) else {
            return Err(ParseError::MissingData("Time: and Distance: lines".to_string()));
        };

        let times = labelled(time, "Time:").map_err(|e| e.at_line(n1))?;
        let distances = labelled(distance, "Distance:").map_err(|e| e.at_line(n2))?;
        Ok(times.into_iter().zip(distances).collect())
    }
}

impl PartSolver<1> for Races {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = shared
            .iter()
            .map(|&(time, record)| (1..time).filter(|h| h * (time - h) > record).count())
            .product();
        Ok(product.to_string())
    }
}

fn main() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"demo"))
        .expect("plugin registration")
        .build();

    println!("Registered {} solver(s)", registry.len());
    for info in registry.iter_info() {
        println!("  {}/{:02}: {} part(s)", info.year, info.day, info.parts);
    }

    let input = "Time:      7  15   30\nDistance:  9  40  200";
    let mut solver = registry
        .create_solver(2023, 6, input)
        .expect("example input parses");
    println!("Parse took {}", solver.parse_duration());

    match solver.solve(1) {
        Ok(result) => println!("Part 1: {} ({})", result.answer, result.duration()),
        Err(e) => eprintln!("Part 1 failed: {e}"),
    }
}
