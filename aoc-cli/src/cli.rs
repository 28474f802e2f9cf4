//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// How solver work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// One solver at a time, in (year, day, part) order
    Sequential,
    /// One task per year; its days run in order
    Year,
    /// One task per year/day; its parts run in order
    #[default]
    Day,
    /// One task per year/day/part, each parsing its own input
    Part,
}

/// Verbosity of the diagnostic log on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Run Advent of Code solvers against local puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day_{dd}.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "~/.local/share/aoc/inputs")]
    pub input_dir: PathBuf,

    /// Worker threads (defaults to the available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level
    #[arg(long, value_enum, default_value_t)]
    pub parallelize_by: ParallelizeBy,

    /// Print answers only
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level for stderr diagnostics; `RUST_LOG` directives take precedence
    #[arg(long, value_enum, default_value_t)]
    pub log_level: LogLevel,
}
