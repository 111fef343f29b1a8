use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use anyhow::{Context, anyhow};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["ranges"])]
pub struct Solver;

type Assignment = RangeInclusive<u32>;

fn parse_range(text: &str) -> anyhow::Result<Assignment> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `a-b`, got {:?}", text))?;
    let start = start.parse::<u32>().with_context(|| format!("invalid section {:?}", start))?;
    let end = end.parse::<u32>().with_context(|| format!("invalid section {:?}", end))?;
    Ok(start..=end)
}

fn parse_pair(row: &str) -> anyhow::Result<(Assignment, Assignment)> {
    let (left, right) = row
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `a-b,c-d`, got {:?}", row))?;
    Ok((parse_range(left)?, parse_range(right)?))
}

fn fully_contains(a: &Assignment, b: &Assignment) -> bool {
    (a.start() <= b.start() && b.end() <= a.end()) || (b.start() <= a.start() && a.end() <= b.end())
}

fn overlaps(a: &Assignment, b: &Assignment) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    type Parsed = Vec<(Assignment, Assignment)>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 0)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                parse_pair(row).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(pairs: &Vec<(Assignment, Assignment)>) -> Result<String, SolveError> {
        Ok(pairs.iter().filter(|(a, b)| fully_contains(a, b)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(pairs: &Vec<(Assignment, Assignment)>) -> Result<String, SolveError> {
        Ok(pairs.iter().filter(|(a, b)| overlaps(a, b)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    fn solve(text: &str, part: u8) -> String {
        let parsed = Solver::parse(&[Group::new(text)]).unwrap();
        Solver::solve_part(&parsed, part).unwrap()
    }

    #[test]
    fn test_single_pairs() {
        assert_eq!(solve("2-4,6-8", 1), "0");
        assert_eq!(solve("2-8,3-7", 1), "1");
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve(SAMPLE, 1), "2");
        assert_eq!(solve(SAMPLE, 2), "4");
    }

    #[test]
    fn test_malformed_pair() {
        let result = Solver::parse(&[Group::new("2-4,6-8\n2-4;6-8\n")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }

    #[test]
    fn test_only_first_group_is_read() {
        let parsed = Solver::parse(&[Group::new(SAMPLE), Group::new("1-9,2-3\n")]).unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(Solver::solve_part(&parsed, 1).unwrap(), "2");
    }

    #[test]
    fn test_missing_group() {
        assert!(matches!(Solver::parse(&[]), Err(ParseError::MissingData(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_containment_implies_overlap(
            a in 0u32..50,
            b in 0u32..50,
            c in 0u32..50,
            d in 0u32..50,
        ) {
            let left = a.min(b)..=a.max(b);
            let right = c.min(d)..=c.max(d);
            if fully_contains(&left, &right) {
                prop_assert!(overlaps(&left, &right));
            }
            prop_assert_eq!(overlaps(&left, &right), overlaps(&right, &left));
        }
    }
}
