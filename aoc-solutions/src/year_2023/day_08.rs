//! Haunted wasteland: walk a left/right node network

use anyhow::anyhow;
use aoc_parser::{expect, expect_end, parse_whitespace, take};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["parser", "network"])]
pub struct Solver;

const LABEL_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network<'a> {
    pub instructions: Vec<Direction>,
    pub nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NetworkSection {
    Instructions,
    Nodes,
}

/// `AAA = (BBB, CCC)`
fn parse_node(line: &str) -> Result<(&str, (&str, &str)), aoc_parser::ParseError> {
    let (label, cursor) = take(line, 0, LABEL_WIDTH)?;
    let cursor = parse_whitespace(line, cursor);
    let cursor = expect(line, cursor, "=")?;
    let cursor = parse_whitespace(line, cursor);
    let cursor = expect(line, cursor, "(")?;
    let (left, cursor) = take(line, cursor, LABEL_WIDTH)?;
    let cursor = parse_whitespace(line, cursor);
    let cursor = expect(line, cursor, ",")?;
    let cursor = parse_whitespace(line, cursor);
    let (right, cursor) = take(line, cursor, LABEL_WIDTH)?;
    let cursor = expect(line, cursor, ")")?;
    expect_end(line, cursor)?;

    Ok((label, (left, right)))
}

fn parse_instructions(number: usize, line: &str) -> Result<Vec<Direction>, ParseError> {
    line.chars()
        .map(|c| match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(ParseError::InvalidFormat(format!(
                "line {number}: unknown direction {other:?}"
            ))),
        })
        .collect()
}

impl<'a> Network<'a> {
    /// Steps from `start` until `done` holds for the current node
    ///
    /// Fails on a dangling node reference, or once every (node, instruction)
    /// state has been visited without finishing.
    pub fn steps_until(
        &self,
        start: &'a str,
        done: impl Fn(&str) -> bool,
    ) -> Result<u64, SolveError> {
        let limit = self.nodes.len() * self.instructions.len();
        let mut current = start;

        for (steps, direction) in self.instructions.iter().cycle().enumerate() {
            if done(current) {
                return Ok(steps as u64);
            }
            if steps > limit {
                break;
            }
            let (left, right) = self.nodes.get(current).ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("node {current:?} is not in the network").into())
            })?;
            current = match direction {
                Direction::Left => *left,
                Direction::Right => *right,
            };
        }

        Err(SolveError::SolveFailed(
            anyhow!("walk from {start:?} never reaches its destination").into(),
        ))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `None` when the result does not fit in a `u64`
fn lcm(a: u64, b: u64) -> Option<u64> {
    match gcd(a, b) {
        0 => Some(0),
        d => (a / d).checked_mul(b),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut section = NetworkSection::Instructions;
        let mut network = Network {
            instructions: Vec::new(),
            nodes: HashMap::new(),
        };

        for (number, line) in aoc_parser::lines(input).filter(|(_, line)| !line.is_empty()) {
            match section {
                NetworkSection::Instructions => {
                    network.instructions = parse_instructions(number, line)?;
                    section = NetworkSection::Nodes;
                }
                NetworkSection::Nodes => {
                    let (label, next) = parse_node(line).map_err(|e| e.at_line(number))?;
                    if network.nodes.insert(label, next).is_some() {
                        return Err(ParseError::InvalidFormat(format!(
                            "line {number}: node {label:?} defined twice"
                        )));
                    }
                }
            }
        }

        if network.instructions.is_empty() {
            return Err(ParseError::MissingData("instruction line".to_string()));
        }
        Ok(network)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.nodes.contains_key("AAA") {
            return Err(SolveError::SolveFailed(anyhow!("no AAA node").into()));
        }
        let steps = shared.steps_until("AAA", |node| node == "ZZZ")?;
        Ok(steps.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut starts: Vec<_> = shared
            .nodes
            .keys()
            .copied()
            .filter(|label| label.ends_with('A'))
            .collect();
        starts.sort_unstable();

        if starts.is_empty() {
            return Err(SolveError::SolveFailed(anyhow!("no node ends with A").into()));
        }

        starts
            .into_iter()
            .map(|start| -> Result<u64, SolveError> {
                let steps = shared.steps_until(start, |node| node.ends_with('Z'))?;
                debug!(start, steps, "ghost reached an end node");
                Ok(steps)
            })
            .try_fold(1, |acc, steps| {
                let steps = steps?;
                lcm(acc, steps).ok_or_else(|| {
                    SolveError::SolveFailed(
                        anyhow!("cycle lengths {acc} and {steps} overflow u64").into(),
                    )
                })
            })
            .map(|steps| steps.to_string())
    }
}
