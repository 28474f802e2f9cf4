//! 2023 puzzles whose inputs are read with the cursor parser

pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_24;
