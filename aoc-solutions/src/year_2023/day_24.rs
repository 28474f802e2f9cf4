//! Hailstones: count future crossings of XY paths inside a test area

use aoc_parser::{expect, expect_end, parse_integer, parse_lines, parse_whitespace};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 24, tags = ["parser", "hailstones"])]
pub struct Solver;

pub const TEST_AREA_MIN: f64 = 200_000_000_000_000.0;
pub const TEST_AREA_MAX: f64 = 400_000_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pub position: Vector,
    pub velocity: Vector,
}

/// Which of the six components comes next on a `px, py, pz @ vx, vy, vz` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    PositionX,
    PositionY,
    PositionZ,
    VelocityX,
    VelocityY,
    VelocityZ,
}

impl Component {
    /// Separator after this component, and the component that follows it
    fn next(self) -> Option<(&'static str, Component)> {
        match self {
            Component::PositionX => Some((",", Component::PositionY)),
            Component::PositionY => Some((",", Component::PositionZ)),
            Component::PositionZ => Some(("@", Component::VelocityX)),
            Component::VelocityX => Some((",", Component::VelocityY)),
            Component::VelocityY => Some((",", Component::VelocityZ)),
            Component::VelocityZ => None,
        }
    }
}

pub fn parse_hailstone(line: &str) -> Result<Hailstone, aoc_parser::ParseError> {
    let mut values = [0i64; 6];
    let mut cursor = 0;
    let mut component = Component::PositionX;

    loop {
        let (value, next) = parse_integer(line, cursor)?;
        values[component as usize] = value;
        cursor = next;

        match component.next() {
            Some((separator, following)) => {
                cursor = parse_whitespace(line, cursor);
                cursor = expect(line, cursor, separator)?;
                cursor = parse_whitespace(line, cursor);
                component = following;
            }
            None => break,
        }
    }
    expect_end(line, cursor)?;

    let [px, py, pz, vx, vy, vz] = values;
    Ok(Hailstone {
        position: Vector { x: px, y: py, z: pz },
        velocity: Vector { x: vx, y: vy, z: vz },
    })
}

impl Hailstone {
    /// Slope and y-intercept of the XY path, or `None` for a vertical path
    fn line_coefficients_2d(&self) -> Option<(f64, f64)> {
        if self.velocity.x == 0 {
            return None;
        }
        let slope = self.velocity.y as f64 / self.velocity.x as f64;
        let intercept = self.position.y as f64 - slope * self.position.x as f64;
        Some((slope, intercept))
    }

    /// Whether `x` lies ahead of the hailstone along its XY path
    fn is_future(&self, x: f64) -> bool {
        (x - self.position.x as f64) / self.velocity.x as f64 > 0.0
    }
}

/// Where the XY paths of two hailstones cross, ignoring time
///
/// `None` for parallel paths and for paths with no X velocity.
pub fn calculate_intersection_2d(a: &Hailstone, b: &Hailstone) -> Option<(f64, f64)> {
    let (m1, c1) = a.line_coefficients_2d()?;
    let (m2, c2) = b.line_coefficients_2d()?;

    if m1 == m2 {
        return None;
    }

    let determinant = m2 - m1;
    let x = (c1 - c2) / determinant;
    let y = (m2 * c1 - m1 * c2) / determinant;
    Some((x, y))
}

/// Pairs whose paths cross inside `[min, max]` on both axes, ahead of both stones
pub fn count_crossings(hailstones: &[Hailstone], min: f64, max: f64) -> usize {
    let inside = |v: f64| (min..=max).contains(&v);

    hailstones
        .iter()
        .enumerate()
        .flat_map(|(i, a)| hailstones[i + 1..].iter().map(move |b| (a, b)))
        .filter(|(a, b)| {
            calculate_intersection_2d(a, b).is_some_and(|(x, y)| {
                inside(x) && inside(y) && a.is_future(x) && b.is_future(x)
            })
        })
        .count()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(parse_lines(input, parse_hailstone)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_crossings(shared, TEST_AREA_MIN, TEST_AREA_MAX).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{Solver as _, SolverExt};

    const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3";

    #[test]
    fn test_parse_hailstone() {
        assert_eq!(
            parse_hailstone("19, 13, 30 @ -2, 1, -2"),
            Ok(Hailstone {
                position: Vector { x: 19, y: 13, z: 30 },
                velocity: Vector { x: -2, y: 1, z: -2 },
            })
        );
    }

    #[test]
    fn test_parse_hailstone_rejects_malformed() {
        assert!(parse_hailstone("19, 13 @ -2, 1, -2").is_err());
        assert!(parse_hailstone("19, 13, 30 @ -2, 1, -2, 4").is_err());
        assert!(matches!(
            parse_hailstone("19, 13, 30 @ -2, 1"),
            Err(aoc_parser::ParseError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_calculate_intersection_2d() {
        let a = parse_hailstone("19, 13, 30 @ -2, 1, -2").unwrap();
        let b = parse_hailstone("18, 19, 22 @ -1, -1, -2").unwrap();
        assert_eq!(
            calculate_intersection_2d(&a, &b),
            Some((14.333333333333334, 15.333333333333334))
        );

        let a = parse_hailstone("18, 19, 22 @ -1, -1, -2").unwrap();
        let b = parse_hailstone("12, 31, 28 @ -1, -2, -1").unwrap();
        assert_eq!(calculate_intersection_2d(&a, &b), Some((-6.0, -5.0)));
    }

    #[test]
    fn test_parallel_paths() {
        let a = parse_hailstone("18, 19, 22 @ -1, -1, -2").unwrap();
        let b = parse_hailstone("20, 25, 34 @ -2, -2, -4").unwrap();
        assert_eq!(calculate_intersection_2d(&a, &b), None);
    }

    #[test]
    fn test_example_area() {
        let hailstones = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(count_crossings(&hailstones, 7.0, 27.0), 2);
    }

    #[test]
    fn test_single_part() {
        let mut hailstones = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut hailstones, 1).unwrap(), "0");
        assert!(matches!(
            Solver::solve_part_checked_range(&mut hailstones, 2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }
}
