//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution parses its input with the `aoc-parser` cursor primitives and
//! registers itself through the `AutoRegisterSolver` derive macro. Linking
//! this crate is enough for `SolverRegistryBuilder::register_all_plugins` to
//! find every solver.

#[cfg(feature = "year-2023")]
pub mod year_2023;
