//! `aoc`: run the registered Advent of Code solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;
mod output;

// Linked for the plugin registrations it submits
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult, WorkItem};
use output::OutputFormatter;
use tracing::{error, info, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.log_level);

    let registry = build_registry(&config.tags)?;
    info!(registered = registry.len(), "solver registry built");

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Print results in order as they arrive, then the summary
fn run_executor(executor: Executor, work_items: &[WorkItem], quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected = work_items.iter().flat_map(|work| {
        work.parts.clone().map(move |part| ResultKey {
            year: work.year,
            day: work.day,
            part,
        })
    });
    let mut aggregator = ResultAggregator::new(expected);

    let formatter = OutputFormatter::new(quiet);
    let (tx, rx) = std::sync::mpsc::channel();
    let mut results = Vec::new();

    let outcome = std::thread::scope(|scope| {
        let worker = scope.spawn(|| executor.execute(tx));

        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }

        worker
            .join()
            .map_err(|_| CliError::Config("executor thread panicked".to_string()))
    })?;

    for leftover in aggregator.drain() {
        formatter.print_result(&leftover);
        results.push(leftover);
    }
    if !aggregator.is_complete() {
        warn!("not every expected result was received");
    }

    formatter.print_summary(&results);
    outcome.map_err(CliError::Executor)?;
    ensure_all_solved(&results)
}

/// Any part that ended in an error fails the whole run
fn ensure_all_solved(results: &[SolverResult]) -> Result<(), CliError> {
    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::PartsFailed {
            failed,
            total: results.len(),
        }),
    }
}

/// Register every linked plugin that carries all of `tags`
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
