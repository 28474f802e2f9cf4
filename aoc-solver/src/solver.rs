//! Parse-once, solve-per-part traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Keeps parsing separate from solving: the parsed value is built once and
/// handed to every part.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day9;
///
/// impl AocParser for Day9 {
///     type SharedData<'a> = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows = aoc_parser::parse_lines(input, |line| {
///             aoc_parser::parse_integers(line, 0).map(|(values, _)| values)
///         })?;
///         Ok(rows)
///     }
/// }
///
/// assert_eq!(Day9::parse("0 3 6\n-1 2").unwrap(), vec![vec![0, 3, 6], vec![-1, 2]]);
/// ```
pub trait AocParser {
    /// Parsed input, plus anything one part wants to leave for the next.
    /// May borrow `&'a str` tokens straight from the input.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving part `N` of a puzzle
///
/// Implement once per part; `#[derive(AocSolver)]` wires the impls into
/// [`Solver::solve_part`].
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let (values, _) = aoc_parser::parse_integers(input, 0)
///             .map_err(|e| ParseError::Syntax(e.at_line(1)))?;
///         Ok(values)
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Sum::parse("1 2 3").unwrap();
/// assert_eq!(<Sum as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Produce the answer for part `N`, free to cache intermediate state in `shared`
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with a fixed number of parts.
///
/// Extends [`AocParser`] with the number of parts and a dispatcher over them.
/// Usually derived with `#[derive(AocSolver)]`; a hand-written impl looks like
/// this:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Races;
///
/// impl AocParser for Races {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let (values, _) = aoc_parser::parse_integers(input, 0)
///             .map_err(|e| ParseError::Syntax(e.at_line(1)))?;
///         Ok(values)
///     }
/// }
///
/// impl Solver for Races {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<u64>().to_string()),
///             2 => Ok(shared.iter().product::<u64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Races::parse("7 15 30").unwrap();
/// assert_eq!(Races::solve_part(&mut shared, 2).unwrap(), "3150");
/// ```
pub trait Solver: AocParser {
    /// Highest part number; parts run from 1 to `PARTS`
    const PARTS: u8;

    /// Dispatch to the `PartSolver` for `part`, or
    /// [`SolveError::PartNotImplemented`] when there is none
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked access to [`Solver::solve_part`]
pub trait SolverExt: Solver {
    /// Reject part 0 and parts above [`Solver::PARTS`] before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
