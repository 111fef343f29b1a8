use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["rucksack", "strings"])]
pub struct Solver;

/// a-z score 1-26, A-Z score 27-52
fn priority(item: u8) -> u32 {
    match item {
        b'a'..=b'z' => u32::from(item - b'a') + 1,
        b'A'..=b'Z' => u32::from(item - b'A') + 27,
        _ => 0,
    }
}

/// First item of `first` that also appears in every slice of `rest`
fn common_item(first: &[u8], rest: &[&[u8]]) -> Option<u8> {
    first
        .iter()
        .copied()
        .find(|item| rest.iter().all(|other| other.contains(item)))
}

fn no_common_item(what: &str, index: usize) -> SolveError {
    SolveError::SolveFailed(format!("{} {} has no common item", what, index + 1).into())
}

impl AocParser for Solver {
    type Parsed = Vec<String>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 0)?
            .rows()
            .map(str::trim)
            .enumerate()
            .map(|(idx, row)| {
                if row.bytes().all(|b| b.is_ascii_alphabetic()) {
                    Ok(row.to_string())
                } else {
                    Err(ParseError::InvalidFormat(format!(
                        "(line {}) items must be ASCII letters: {:?}",
                        idx + 1,
                        row
                    )))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(rucksacks: &Vec<String>) -> Result<String, SolveError> {
        rucksacks
            .iter()
            .enumerate()
            .map(|(idx, rucksack)| {
                let (left, right) = rucksack.as_bytes().split_at(rucksack.len() / 2);
                common_item(left, &[right])
                    .map(priority)
                    .ok_or_else(|| no_common_item("rucksack", idx))
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(rucksacks: &Vec<String>) -> Result<String, SolveError> {
        // A trailing partial group of fewer than three rucksacks is ignored
        rucksacks
            .chunks_exact(3)
            .enumerate()
            .map(|(idx, group)| {
                common_item(group[0].as_bytes(), &[group[1].as_bytes(), group[2].as_bytes()])
                    .map(priority)
                    .ok_or_else(|| no_common_item("group", idx))
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const SAMPLE: &str = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    fn solve(text: &str, part: u8) -> Result<String, SolveError> {
        let parsed = Solver::parse(&[Group::new(text)]).unwrap();
        Solver::solve_part(&parsed, part)
    }

    #[test]
    fn test_single_rucksack() {
        assert_eq!(solve("vJrwpWtwJgWrhcsFMMfFFhFp", 1).unwrap(), "16");
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve(SAMPLE, 1).unwrap(), "157");
        assert_eq!(solve(SAMPLE, 2).unwrap(), "70");
    }

    #[test]
    fn test_priority_range() {
        assert_eq!(priority(b'a'), 1);
        assert_eq!(priority(b'z'), 26);
        assert_eq!(priority(b'A'), 27);
        assert_eq!(priority(b'Z'), 52);
    }

    #[test]
    fn test_incomplete_triple_is_ignored() {
        let text = format!("{}abcd\n", SAMPLE);
        assert_eq!(solve(&text, 2).unwrap(), "70");
    }

    #[test]
    fn test_no_common_item() {
        assert!(matches!(solve("abCD", 1), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_only_first_group_is_read() {
        let parsed = Solver::parse(&[Group::new(SAMPLE), Group::new("abCD\n")]).unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(Solver::solve_part(&parsed, 1).unwrap(), "157");
    }

    #[test]
    fn test_missing_group() {
        assert!(matches!(Solver::parse(&[]), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_non_letter_rejected() {
        assert!(Solver::parse(&[Group::new("ab1c\n")]).is_err());
    }
}
