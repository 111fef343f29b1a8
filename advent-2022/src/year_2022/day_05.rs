use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use regex::Regex;
use std::sync::OnceLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["stacks", "fixture"])]
pub struct Solver;

/// Starting crates of stacks 1 through 9, bottom to top.
///
/// These come from the puzzle drawing of one specific account's input; the
/// drawing group itself is not parsed.
const INITIAL_STACKS: [&str; 9] = [
    "NCRTMZP", "DNTSBZ", "MHQRFCTG", "GRZ", "ZNRH", "FHSWPZLD", "WDZRCGM", "SJFLHWZQ", "SQPWN",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn move_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("valid regex"))
}

fn parse_move(row: &str) -> Option<Move> {
    let caps = move_regex().captures(row.trim())?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<usize>().ok();
    let (count, from, to) = (field(1)?, field(2)?, field(3)?);
    let stack_range = 1..=INITIAL_STACKS.len();
    if !stack_range.contains(&from) || !stack_range.contains(&to) {
        return None;
    }
    Some(Move {
        count,
        from: from - 1,
        to: to - 1,
    })
}

fn initial_stacks() -> Vec<Vec<char>> {
    INITIAL_STACKS.iter().map(|s| s.chars().collect()).collect()
}

fn tops(stacks: &[Vec<char>]) -> String {
    stacks.iter().filter_map(|s| s.last()).collect()
}

/// Replay `moves`, lifting the crates of each move with `crane`
fn rearrange(moves: &[Move], crane: fn(&mut Vec<char>)) -> Result<String, SolveError> {
    let mut stacks = initial_stacks();
    for (idx, mv) in moves.iter().enumerate() {
        let source = &mut stacks[mv.from];
        if source.len() < mv.count {
            return Err(SolveError::SolveFailed(
                format!(
                    "move {} takes {} crates from stack {} holding {}",
                    idx + 1,
                    mv.count,
                    mv.from + 1,
                    source.len()
                )
                .into(),
            ));
        }
        let mut lifted = source.split_off(source.len() - mv.count);
        crane(&mut lifted);
        stacks[mv.to].extend(lifted);
    }
    Ok(tops(&stacks))
}

impl AocParser for Solver {
    type Parsed = Vec<Move>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 1)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                parse_move(row).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected `move N from 1-9 to 1-9`, got {:?}",
                        idx + 1,
                        row
                    ))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(moves: &Vec<Move>) -> Result<String, SolveError> {
        // One crate at a time: the lifted block lands reversed
        rearrange(moves, |lifted| lifted.reverse())
    }
}

impl PartSolver<2> for Solver {
    fn solve(moves: &Vec<Move>) -> Result<String, SolveError> {
        rearrange(moves, |_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const DRAWING: &str = "[P]\n 1   2   3   4   5   6   7   8   9";

    fn solve(moves: &str, part: u8) -> Result<String, SolveError> {
        let parsed = Solver::parse(&[Group::new(DRAWING), Group::new(moves)]).unwrap();
        Solver::solve_part(&parsed, part)
    }

    #[test]
    fn test_no_moves_keeps_initial_tops() {
        assert_eq!(solve("", 1).unwrap(), "PZGZHDMQN");
    }

    #[test]
    fn test_single_move() {
        assert_eq!(solve("move 2 from 1 to 4\n", 1).unwrap(), "MZGZHDMQN");
        assert_eq!(solve("move 2 from 1 to 4\n", 2).unwrap(), "MZGPHDMQN");
    }

    #[test]
    fn test_sequence_of_moves() {
        // Stack 4 (GRZ) onto stack 9, then two back from 9 to 4
        let moves = "move 3 from 4 to 9\nmove 2 from 9 to 4\n";
        assert_eq!(solve(moves, 1).unwrap(), "PZGRHDMQZ");
        assert_eq!(solve(moves, 2).unwrap(), "PZGZHDMQG");
    }

    #[test]
    fn test_parsing_stops_at_empty_line() {
        let parsed =
            Solver::parse(&[Group::new(DRAWING), Group::new("move 1 from 2 to 3\n")]).unwrap();
        assert_eq!(
            parsed,
            vec![Move {
                count: 1,
                from: 1,
                to: 2
            }]
        );
    }

    #[test]
    fn test_stack_out_of_range() {
        let result = Solver::parse(&[Group::new(DRAWING), Group::new("move 1 from 0 to 10")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_moves_group() {
        let result = Solver::parse(&[Group::new(DRAWING)]);
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_move_too_many_crates() {
        assert!(matches!(
            solve("move 4 from 4 to 1", 1),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
