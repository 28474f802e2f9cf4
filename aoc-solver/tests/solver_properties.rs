//! Property-based tests for part dispatch and range checking
//!
//! **Feature: solver-framework**

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverExt,
    SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Solver whose part count is a const parameter
struct Fixed<const N: u8>;

impl<const N: u8> AocParser for Fixed<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Fixed<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

/// Extrapolation-style solver: part 1 caches the differences table, part 2 reuses it
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct History;

#[derive(Debug)]
struct HistoryData {
    values: Vec<i64>,
    differences: Option<Vec<Vec<i64>>>,
}

impl AocParser for History {
    type SharedData<'a> = HistoryData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (values, cursor) = aoc_parser::parse_integers::<i64>(input, 0)
            .map_err(|e| ParseError::Syntax(e.at_line(1)))?;
        aoc_parser::expect_end(input, cursor).map_err(|e| ParseError::Syntax(e.at_line(1)))?;
        Ok(HistoryData {
            values,
            differences: None,
        })
    }
}

fn differences(shared: &mut HistoryData) -> &Vec<Vec<i64>> {
    shared.differences.get_or_insert_with(|| {
        let mut rows = vec![shared.values.clone()];
        while let Some(last) = rows.last() {
            if last.iter().all(|&v| v == 0) {
                break;
            }
            let next = last.windows(2).map(|w| w[1] - w[0]).collect();
            rows.push(next);
        }
        rows
    })
}

impl PartSolver<1> for History {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let next: i64 = differences(shared).iter().filter_map(|r| r.last()).sum();
        Ok(next.to_string())
    }
}

impl PartSolver<2> for History {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cached = shared.differences.is_some();
        let prior = differences(shared)
            .iter()
            .rev()
            .filter_map(|r| r.first())
            .fold(0, |acc, &first| first - acc);
        Ok(format!("{prior} cached={cached}"))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// **Property 1: Out-of-range rejection**
    /// *For any* part that is 0 or above PARTS, the checked call returns
    /// `PartOutOfRange(part)`; otherwise it delegates to `solve_part`.
    #[test]
    fn prop_out_of_range_rejection(part in 0u8..=255) {
        let result = Fixed::<3>::solve_part_checked_range(&mut (), part);
        if part == 0 || part > 3 {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    /// **Property 2: Derived dispatch matches direct calls**
    #[test]
    fn prop_derived_dispatch_matches_part_solver(
        values in prop::collection::vec(-50i64..50, 1..8),
        part in 1u8..=2,
    ) {
        let input = values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let mut via_solver = History::parse(&input).unwrap();
        let mut direct = History::parse(&input).unwrap();

        let dispatched = History::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <History as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <History as PartSolver<2>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    /// **Property 3: Invalid parts are not implemented**
    #[test]
    fn prop_invalid_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = History::parse("1 2 3").unwrap();
        match History::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_state_carries_between_parts() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<History>(2023, 9)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 9, "10 13 16 21 30 45").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "68");
    assert_eq!(solver.solve(2).unwrap().answer, "5 cached=true");
}

#[test]
fn test_parse_errors_surface_from_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<History>(2023, 9)
        .unwrap()
        .build();

    let err = match registry.create_solver(2023, 9, "1 2 x") {
        Err(e) => e,
        Ok(_) => panic!("expected a parse error"),
    };
    assert_eq!(
        err.to_string(),
        "Parse error: Syntax error on line 1: unexpected trailing input \"x\" at offset 4"
    );
}

#[test]
fn test_timing_is_recorded() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<History>(2023, 9)
        .unwrap()
        .build();

    let mut solver: Box<dyn DynSolver> = registry.create_solver(2023, 9, "0 3 6").unwrap();
    assert!(solver.parse_end() >= solver.parse_start());
    let result = solver.solve(1).unwrap();
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2023, 9, 2));
}
