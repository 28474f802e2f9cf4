//! Boat races: count the hold times that beat each record

use aoc_parser::{expect, expect_end, parse_integers, parse_number};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["parser", "races"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Races {
    pub times: Vec<u64>,
    pub distances: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RaceSection {
    Time,
    Distance,
    Done,
}

fn parse_labelled(line: &str, label: &str) -> Result<Vec<u64>, aoc_parser::ParseError> {
    let cursor = expect(line, 0, label)?;
    let (values, cursor) = parse_integers(line, cursor)?;
    expect_end(line, cursor)?;
    Ok(values)
}

/// Number of hold times `h` in `1..time` with `h * (time - h) > record`
///
/// The travelled distance rises up to `time / 2` and mirrors after it, so the
/// shortest winning hold is found by bisection and the count follows from
/// symmetry.
pub fn count_ways(time: u64, record: u64) -> u64 {
    let beats = |hold: u64| u128::from(hold) * u128::from(time - hold) > u128::from(record);

    let half = time / 2;
    if half == 0 || !beats(half) {
        return 0;
    }

    let (mut lo, mut hi) = (1, half);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if beats(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    time - 2 * lo + 1
}

fn concatenate(values: &[u64]) -> Result<u64, SolveError> {
    let digits: String = values.iter().map(u64::to_string).collect();
    parse_number(&digits, 0).map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

impl AocParser for Solver {
    type SharedData<'a> = Races;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut section = RaceSection::Time;
        let mut times = Vec::new();
        let mut distances = Vec::new();

        for (number, line) in aoc_parser::lines(input).filter(|(_, line)| !line.is_empty()) {
            section = match section {
                RaceSection::Time => {
                    times = parse_labelled(line, "Time:").map_err(|e| e.at_line(number))?;
                    RaceSection::Distance
                }
                RaceSection::Distance => {
                    distances = parse_labelled(line, "Distance:").map_err(|e| e.at_line(number))?;
                    RaceSection::Done
                }
                RaceSection::Done => {
                    return Err(ParseError::InvalidFormat(format!(
                        "unexpected line {number} after the distance table"
                    )));
                }
            };
        }

        match section {
            RaceSection::Time => Err(ParseError::MissingData("Time: line".to_string())),
            RaceSection::Distance => Err(ParseError::MissingData("Distance: line".to_string())),
            RaceSection::Done if times.len() != distances.len() => {
                Err(ParseError::InvalidFormat(format!(
                    "{} times but {} distances",
                    times.len(),
                    distances.len()
                )))
            }
            RaceSection::Done => Ok(Races { times, distances }),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .times
            .iter()
            .zip(&shared.distances)
            .map(|(&time, &record)| count_ways(time, record))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let time = concatenate(&shared.times)?;
        let record = concatenate(&shared.distances)?;
        Ok(count_ways(time, record).to_string())
    }
}
