//! Runtime configuration resolved from the command line

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// A solver must carry all of these to run
    pub tags: Vec<String>,
    /// Root of the `{year}/day_{dd}.txt` tree, with `~` expanded
    pub input_dir: PathBuf,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "--threads must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => available_threads(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_home(&args.input_dir),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            log_level: args.log_level.into(),
        })
    }
}

/// Replace a leading `~` component with the home directory, when one is known
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}
