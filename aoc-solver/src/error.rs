//! Failures raised while building, parsing and solving puzzles

use aoc_parser::LineError;
use thiserror::Error;

/// Why an input could not be turned into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The cursor parser rejected a line
    #[error("Syntax error on {0}")]
    Syntax(#[from] LineError),
    /// Every line parsed but the records do not fit together
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle needs never appeared
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Why a single part produced no answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// In range, but no `PartSolver<N>` backs it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Zero or above `Solver::PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures from looking up and running a registered solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    /// Outside the years and days the registry can index
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Failures while filling a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same puzzle
    #[error("Solver for {0}/{1:02} is already registered")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
}
