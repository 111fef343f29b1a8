//! Property-based tests for solver part bounds validation

use advent_core::{
    AocParser, DynSolver, Group, ParseError, SolveError, Solver, SolverExt, SolverInstance,
};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type Parsed = ();

    fn parse(_groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_parsed: &(), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked_range(&(), part),
        3 => TestSolver::<3>::solve_part_checked_range(&(), part),
        _ => TestSolver::<2>::solve_part_checked_range(&(), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    /// Parts outside 1..=PARTS are rejected with PartOutOfRange(part)
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In-range parts delegate to solve_part unchanged
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked_result = TestSolver::<2>::solve_part_checked_range(&(), part);
        let direct_result = TestSolver::<2>::solve_part(&(), part);

        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }
}

#[test]
fn test_instance_reports_metadata() {
    let instance = SolverInstance::<TestSolver<2>>::new(2022, 6, &[]).unwrap();
    assert_eq!(instance.year(), 2022);
    assert_eq!(instance.day(), 6);
    assert_eq!(instance.parts(), 2);
    assert!(instance.parse_duration() >= chrono::TimeDelta::zero());
    assert!(matches!(
        instance.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert_eq!(instance.solve(2).unwrap().answer, "part2");
}
