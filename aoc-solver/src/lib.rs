//! Advent of Code Solver Library
//!
//! A type-safe framework for puzzle solvers. Each solver parses its input
//! once (usually with the `aoc-parser` cursor primitives) and then answers
//! one or more parts against the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the solver's shared data
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] ties the parts together; derive it with `#[derive(AocSolver)]`
//! - [`SolverRegistry`] creates type-erased [`DynSolver`]s by year and day
//! - `#[derive(AutoRegisterSolver)]` submits a solver to the plugin inventory
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Totals;
//!
//! impl AocParser for Totals {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         let rows = aoc_parser::parse_lines(input, |line| aoc_parser::parse_integer::<i64>(line, 0))?;
//!         Ok(rows.into_iter().map(|(value, _)| value).collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Totals>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n-3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "0");
//! assert_eq!(solver.solve(2).unwrap().answer, "-6");
//! ```
//!
//! # Plugin registration
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 4, tags = ["parser"])]
//! pub struct Solver;
//! ```
//!
//! Plugins are picked up by [`SolverRegistryBuilder::register_all_plugins`]
//! or filtered with [`SolverRegistryBuilder::register_solver_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
