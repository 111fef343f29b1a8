use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::Context;
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["calories", "sum"])]
pub struct Solver;

impl AocParser for Solver {
    /// Total calories carried by each elf, in input order
    type Parsed = Vec<u64>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        groups
            .iter()
            .enumerate()
            .map(|(group_idx, group)| -> anyhow::Result<u64> {
                group.rows().try_fold(0u64, |sum, row| {
                    let calories = row.trim().parse::<u64>().with_context(|| {
                        format!("(group {}) invalid calories {:?}", group_idx + 1, row)
                    })?;
                    Ok(sum + calories)
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(sums: &Vec<u64>) -> Result<String, SolveError> {
        Ok(sums.iter().max().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(sums: &Vec<u64>) -> Result<String, SolveError> {
        let top_three: u64 = sums.iter().sorted_unstable_by(|a, b| b.cmp(a)).take(3).sum();
        Ok(top_three.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{Solver as _, split_groups};
    use proptest::prelude::*;

    const SAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    fn solve(groups: &[Group], part: u8) -> String {
        let parsed = Solver::parse(groups).unwrap();
        Solver::solve_part(&parsed, part).unwrap()
    }

    #[test]
    fn test_three_groups() {
        let groups = [Group::new("3\n4"), Group::new("8"), Group::new("1\n1")];
        assert_eq!(solve(&groups, 1), "8");
        assert_eq!(solve(&groups, 2), "17");
    }

    #[test]
    fn test_sample() {
        let groups = split_groups(SAMPLE);
        assert_eq!(solve(&groups, 1), "24000");
        assert_eq!(solve(&groups, 2), "45000");
    }

    #[test]
    fn test_fewer_than_three_groups() {
        let groups = [Group::new("10\n20\n30"), Group::new("5")];
        assert_eq!(solve(&groups, 1), "60");
        assert_eq!(solve(&groups, 2), "65");
    }

    #[test]
    fn test_invalid_row() {
        let result = Solver::parse(&[Group::new("12\nabc\n")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("group 1")));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_part2_bounds(
            sums in prop::collection::vec(prop::collection::vec(0u64..100_000, 1..5), 1..20),
        ) {
            let text = sums
                .iter()
                .map(|group| group.iter().join("\n"))
                .join("\n\n");
            let groups = split_groups(&text);

            let max: u64 = solve(&groups, 1).parse().unwrap();
            let top: u64 = solve(&groups, 2).parse().unwrap();
            let total: u64 = sums.iter().flatten().sum();

            prop_assert!(max <= top);
            prop_assert!(top <= total);
            prop_assert_eq!(solve(&groups, 2), solve(&groups, 2));
        }
    }
}
