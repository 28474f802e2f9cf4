//! Runs registered solvers on a rayon pool and streams their results

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Outcome of one part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// `None` when the input never made it to a parsed solver
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// One registered solver and the parts to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Everything a worker thread needs, shared by reference
struct RunContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

pub struct Executor {
    context: RunContext,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: RunContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Registered solvers that pass the year, day and part filters, in order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let context = &self.context;
        context
            .registry
            .iter_info()
            .filter(|info| context.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| context.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: select_parts(context.part_filter, info.parts),
            })
            .filter(|work| !work.parts.is_empty())
            .collect()
    }

    /// Run every work item, sending one result per part to `tx`
    ///
    /// Per-part failures travel inside the results. The returned error only
    /// covers the run itself breaking down, such as the receiver going away.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            solvers = work_items.len(),
            mode = ?self.context.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "starting run"
        );

        match self.context.parallelize_by {
            ParallelizeBy::Sequential => run_group(work_items, &tx, &self.context),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|work| work.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.run_parallel(by_year, &tx)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|work| vec![work]).collect();
                self.run_parallel(singles, &tx)
            }
        }
    }

    fn run_parallel(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;
        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|group| run_group(group, tx, context).err())
                .reduce(
                    || None,
                    |left, right| match (left, right) {
                        (Some(left), Some(right)) => Some(ArcExecutorError::combine(left, right)),
                        (left, right) => left.or(right),
                    },
                )
                .map_or(Ok(()), Err)
        })
    }
}

#[allow(clippy::reversed_empty_ranges)]
fn select_parts(part_filter: Option<u8>, available: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(part) if part <= available => part..=part,
        Some(_) => 1..=0,
        None => 1..=available,
    }
}

/// Run items one after another, collecting rather than stopping on errors
fn run_group(
    items: Vec<WorkItem>,
    tx: &Sender<SolverResult>,
    context: &RunContext,
) -> Result<(), ArcExecutorError> {
    let mut collected: Option<ArcExecutorError> = None;
    for work in items {
        if let Err(e) = run_work_item(&work, tx, context) {
            collected = Some(ArcExecutorError::combine_opt(collected, e));
        }
    }
    collected.map_or(Ok(()), Err)
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

/// Report `error` against every part of `work`
fn fail_all_parts(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match context.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year, day, error = %source, "skipping solver without input");
            let error = ExecutorError::Input { year, day, source }.into();
            return fail_all_parts(work, error, tx);
        }
    };

    if context.parallelize_by == ParallelizeBy::Part {
        run_parts_parallel(work, &input, tx, context)
    } else {
        run_parts_in_order(work, &input, tx, context)
    }
}

/// Parse once and solve the parts in order against the same solver
fn run_parts_in_order(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    context: &RunContext,
) -> Result<(), ArcExecutorError> {
    let mut solver = match context.registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => return fail_all_parts(work, parse_failure(work, e), tx),
    };

    for part in work.parts.clone() {
        send(tx, solve_part(&mut *solver, part))?;
    }
    Ok(())
}

/// Solve each part on its own pool task, each with a freshly parsed solver
///
/// The indexed collect keeps the results in part order.
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    context: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match context.registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(&mut *solver, part),
            Err(e) => SolverResult::failed(year, day, part, parse_failure(work, e)),
        })
        .collect();

    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

fn parse_failure(work: &WorkItem, error: SolverError) -> ArcExecutorError {
    warn!(year = work.year, day = work.day, %error, "solver rejected its input");
    ExecutorError::Solver(error).into()
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = Some(solver.parse_duration());

    match solver.solve(part) {
        Ok(solved) => {
            debug!(year, day, part, micros = solved.duration().num_microseconds(), "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration,
            }
        }
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(ExecutorError::Solver(e.into()).into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}
