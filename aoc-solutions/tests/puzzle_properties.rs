//! Property-based tests for the 2023 solvers and their registration
//!
//! **Feature: year-2023-solutions**

use aoc_solutions::year_2023::{day_05, day_06, day_09};
use aoc_solver::SolverRegistryBuilder;
use proptest::prelude::*;

proptest! {
    /// **Property 1: Winning hold count**
    ///
    /// The bisection-based count equals a direct scan over every hold time.
    #[test]
    fn prop_count_ways_matches_scan(time in 0u64..400, record in 0u64..40_000) {
        let expected = (1..time).filter(|h| h * (time - h) > record).count() as u64;
        prop_assert_eq!(day_06::count_ways(time, record), expected);
    }

    /// **Property 2: Polynomial extrapolation**
    ///
    /// For a quadratic sequence the extrapolated neighbours are the
    /// polynomial's own values one step past either end.
    #[test]
    fn prop_extrapolate_quadratic(
        a in -20i64..20,
        b in -50i64..50,
        c in -100i64..100,
        len in 3usize..12,
    ) {
        let f = |n: i64| a * n * n + b * n + c;
        let values: Vec<i64> = (0..len as i64).map(f).collect();
        prop_assert_eq!(day_09::extrapolate(&values), (f(len as i64), f(-1)));
    }

    /// **Property 3: Interval mapping agrees with point mapping**
    ///
    /// Every point of a seed interval lands inside one of the mapped
    /// intervals, and splitting neither gains nor loses length.
    #[test]
    fn prop_intervals_cover_points(
        mappings in prop::collection::vec((0i64..200, 0i64..100, 1i64..30), 0..5),
        start in 0i64..120,
        len in 1i64..40,
    ) {
        // Overlapping source ranges make the first mapping win pointwise, so
        // keep them disjoint
        let mut taken = Vec::new();
        let mappings: Vec<day_05::Mapping> = mappings
            .into_iter()
            .filter(|&(_, src, len)| {
                let free = taken.iter().all(|&(s, e)| src + len <= s || e <= src);
                if free {
                    taken.push((src, src + len));
                }
                free
            })
            .map(|(dest, src, len)| day_05::Mapping { dest, src, len })
            .collect();
        let map = day_05::Map { source: "seed", target: "soil", mappings };

        let mapped = map.apply_intervals(vec![(start, start + len)]);

        let total: i64 = mapped.iter().map(|(s, e)| e - s).sum();
        prop_assert_eq!(total, len);
        for x in start..start + len {
            let y = map.apply(x);
            prop_assert!(mapped.iter().any(|&(s, e)| s <= y && y < e), "{} -> {} not covered", x, y);
        }
    }
}

#[test]
fn test_all_days_register() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2023)
        .unwrap()
        .build();

    for day in [4, 5, 6, 7, 8, 9, 24] {
        assert!(registry.contains(2023, day), "day {day} missing");
    }
    assert_eq!(registry.get_info(2023, 24).unwrap().parts, 1);
    assert_eq!(registry.get_info(2023, 7).unwrap().parts, 2);
}

#[test]
fn test_tag_filter_selects_one_day() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"camel-cards"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(2023, 7));
}

#[test]
fn test_registered_solver_end_to_end() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2023, 6, "Time:      7  15   30\nDistance:  9  40  200\n")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "288");
    assert_eq!(solver.solve(2).unwrap().answer, "71503");
}
