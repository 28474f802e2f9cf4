//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Top-level error, reported once by `main`
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },
}

/// Failure to load a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input file at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while running solvers
///
/// Shared between worker threads through the `Arc` newtype, so one failure can
/// be attached to every part it affects.
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Input for {year}/{day:02} unavailable: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Result channel closed")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("{} errors occurred", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening nested lists
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let mut errors = Vec::new();
        for error in [first, second] {
            match error.inner() {
                ExecutorError::Multiple(nested) => errors.extend(nested.iter().cloned()),
                _ => errors.push(error),
            }
        }
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(existing) => Self::combine(existing, new),
            None => new,
        }
    }
}
