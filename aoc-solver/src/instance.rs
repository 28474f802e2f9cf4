//! Parsed puzzles behind a uniform, object-safe interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// One part's answer with the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Run `f`, returning its value with the UTC instants around it
fn timed<T>(f: impl FnOnce() -> T) -> (T, DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now();
    let value = f();
    (value, start, Utc::now())
}

/// Shared data parsed for one year/day, kept alive so every part reuses it
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` once; the result may borrow from it
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_start, parse_end) = timed(|| S::parse(input));
        let shared = shared?;

        debug!(
            year,
            day,
            micros = (parse_end - parse_start).num_microseconds(),
            "parsed input"
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// What the registry hands out: any [`SolverInstance`] with its solver type
/// erased
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} (took {})", part, result.answer, result.duration());
///     }
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part` against the shared data, timing only the solve itself.
    /// Parts outside `1..=parts()` fail with [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, solve_start, solve_end) =
            timed(|| S::solve_part_checked_range(&mut self.shared, part));
        let answer = answer?;

        debug!(
            year = self.year,
            day = self.day,
            part,
            micros = (solve_end - solve_start).num_microseconds(),
            "solved part"
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
