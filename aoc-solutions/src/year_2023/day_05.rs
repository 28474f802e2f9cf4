//! Seed almanac: follow seeds through a chain of range maps down to a location

use anyhow::anyhow;
use aoc_parser::{expect, expect_end, parse_integer, parse_integers, parse_whitespace, parse_while};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["parser", "almanac"])]
pub struct Solver;

/// `dest src len`: values in `[src, src + len)` shift by `dest - src`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub dest: i64,
    pub src: i64,
    pub len: i64,
}

impl Mapping {
    fn src_end(&self) -> i64 {
        self.src + self.len
    }

    fn shift(&self, value: i64) -> i64 {
        value - self.src + self.dest
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub mappings: Vec<Mapping>,
}

impl Map<'_> {
    /// Values not covered by any mapping pass through unchanged
    pub fn apply(&self, value: i64) -> i64 {
        self.mappings
            .iter()
            .find(|m| (m.src..m.src_end()).contains(&value))
            .map_or(value, |m| m.shift(value))
    }

    /// Map half-open intervals, splitting them where mappings start and stop
    pub fn apply_intervals(&self, intervals: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
        let mut mapped = Vec::with_capacity(intervals.len());
        let mut pending = intervals;

        for mapping in &self.mappings {
            let mut unmatched = Vec::with_capacity(pending.len());
            for (start, end) in pending {
                let lo = start.max(mapping.src);
                let hi = end.min(mapping.src_end());
                if lo >= hi {
                    unmatched.push((start, end));
                    continue;
                }
                mapped.push((mapping.shift(lo), mapping.shift(hi)));
                if start < lo {
                    unmatched.push((start, lo));
                }
                if hi < end {
                    unmatched.push((hi, end));
                }
            }
            pending = unmatched;
        }

        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac<'a> {
    pub seeds: Vec<i64>,
    /// Keyed by source category
    pub maps: HashMap<&'a str, Map<'a>>,
}

enum Section<'a> {
    Seeds,
    MapHeader,
    MapEntries(Map<'a>),
}

fn parse_seeds(line: &str) -> Result<Vec<i64>, aoc_parser::ParseError> {
    let cursor = expect(line, 0, "seeds:")?;
    let (seeds, cursor) = parse_integers(line, cursor)?;
    expect_end(line, cursor)?;
    Ok(seeds)
}

fn parse_map_header(line: &str) -> Result<Map<'_>, aoc_parser::ParseError> {
    let (source, cursor) = parse_while(line, 0, |c| c.is_ascii_alphabetic());
    let cursor = expect(line, cursor, "-to-")?;
    let (target, cursor) = parse_while(line, cursor, |c| c.is_ascii_alphabetic());
    let cursor = expect(line, cursor, " map:")?;
    expect_end(line, cursor)?;

    Ok(Map {
        source,
        target,
        mappings: Vec::new(),
    })
}

fn parse_mapping(line: &str) -> Result<Mapping, aoc_parser::ParseError> {
    let (dest, cursor) = parse_integer(line, 0)?;
    let cursor = parse_whitespace(line, cursor);
    let (src, cursor) = parse_integer(line, cursor)?;
    let cursor = parse_whitespace(line, cursor);
    let (len, cursor) = parse_integer(line, cursor)?;
    expect_end(line, cursor)?;

    Ok(Mapping { dest, src, len })
}

impl<'a> Almanac<'a> {
    fn insert(&mut self, map: Map<'a>) -> Result<(), ParseError> {
        if self.maps.contains_key(map.source) {
            return Err(ParseError::InvalidFormat(format!(
                "duplicate map for category {:?}",
                map.source
            )));
        }
        self.maps.insert(map.source, map);
        Ok(())
    }

    /// Maps from `seed` to `location`, in order
    pub fn chain(&self) -> Result<Vec<&Map<'a>>, SolveError> {
        let mut chain = Vec::new();
        let mut category = "seed";

        while category != "location" {
            if chain.len() > self.maps.len() {
                return Err(SolveError::SolveFailed(
                    anyhow!("category maps form a cycle through {category:?}").into(),
                ));
            }
            let map = self.maps.get(category).ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("no map from category {category:?}").into())
            })?;
            chain.push(map);
            category = map.target;
        }

        debug!(maps = chain.len(), "resolved seed-to-location chain");
        Ok(chain)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut almanac = Almanac {
            seeds: Vec::new(),
            maps: HashMap::new(),
        };
        let mut section = Section::Seeds;

        for (number, line) in aoc_parser::lines(input) {
            let at_line = |e: aoc_parser::ParseError| e.at_line(number);

            section = match section {
                Section::Seeds if line.is_empty() => Section::Seeds,
                Section::Seeds => {
                    almanac.seeds = parse_seeds(line).map_err(at_line)?;
                    Section::MapHeader
                }
                Section::MapHeader if line.is_empty() => Section::MapHeader,
                Section::MapHeader => Section::MapEntries(parse_map_header(line).map_err(at_line)?),
                Section::MapEntries(map) if line.is_empty() => {
                    almanac.insert(map)?;
                    Section::MapHeader
                }
                Section::MapEntries(mut map) => {
                    map.mappings.push(parse_mapping(line).map_err(at_line)?);
                    Section::MapEntries(map)
                }
            };
        }

        match section {
            Section::Seeds => return Err(ParseError::MissingData("seeds".to_string())),
            Section::MapEntries(map) => almanac.insert(map)?,
            Section::MapHeader => {}
        }

        Ok(almanac)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let chain = shared.chain()?;
        shared
            .seeds
            .iter()
            .map(|&seed| chain.iter().fold(seed, |value, map| map.apply(value)))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no seeds listed").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                anyhow!("seed ranges need an even count, got {}", shared.seeds.len()).into(),
            ));
        }

        let chain = shared.chain()?;
        let seeds = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[0] + pair[1]))
            .filter(|(start, end)| start < end)
            .collect();

        chain
            .iter()
            .fold(seeds, |intervals, map| map.apply_intervals(intervals))
            .into_iter()
            .map(|(start, _)| start)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no seed ranges listed").into()))
    }
}
