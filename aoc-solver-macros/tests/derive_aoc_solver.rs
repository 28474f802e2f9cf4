use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Readings;

impl AocParser for Readings {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = aoc_parser::parse_lines(input, |line| {
            aoc_parser::parse_integers::<i64>(line, 0).map(|(values, _)| values)
        })?;
        Ok(rows.into_iter().flatten().collect())
    }
}

impl PartSolver<1> for Readings {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Readings {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no readings".into()))
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct SinglePart;

impl AocParser for SinglePart {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for SinglePart {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<Readings as Solver>::PARTS, 2);
    assert_eq!(<SinglePart as Solver>::PARTS, 1);
}

#[test]
fn test_solve_part_dispatches_to_part_solvers() {
    let mut shared = Readings::parse("3 -4 10\n\n7").unwrap();
    assert_eq!(Readings::solve_part(&mut shared, 1).unwrap(), "16");
    assert_eq!(Readings::solve_part(&mut shared, 2).unwrap(), "10");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = Readings::parse("1").unwrap();
    assert!(matches!(
        Readings::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        Readings::solve_part_checked_range(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn test_part_errors_propagate() {
    let mut shared = Readings::parse("").unwrap();
    assert!(matches!(
        Readings::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("  abc  ");
    let mut shared = SinglePart::parse(&input).unwrap();
    assert_eq!(SinglePart::solve_part(&mut shared, 1).unwrap(), "3");
}
