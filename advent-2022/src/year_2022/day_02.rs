use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["rock-paper-scissors", "lookup"])]
pub struct Solver;

/// Score per round, indexed by `[opponent][own letter]`, when the own letter is a shape
const SHAPE_SCORES: [[u32; 3]; 3] = [
    // A (rock): X, Y, Z
    [4, 8, 3],
    // B (paper)
    [1, 5, 9],
    // C (scissors)
    [7, 2, 6],
];

/// Same indexing, when the own letter is the outcome to force (X lose, Y draw, Z win)
const OUTCOME_SCORES: [[u32; 3]; 3] = [
    [3, 4, 8],
    [1, 5, 9],
    [2, 6, 7],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: usize,
    own: usize,
}

fn parse_round(row: &str) -> Option<Round> {
    let (opponent, own) = row.trim().split_once(' ')?;
    let opponent = match opponent {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        _ => return None,
    };
    let own = match own {
        "X" => 0,
        "Y" => 1,
        "Z" => 2,
        _ => return None,
    };
    Some(Round { opponent, own })
}

fn total_score(rounds: &[Round], table: &[[u32; 3]; 3]) -> u32 {
    rounds.iter().map(|r| table[r.opponent][r.own]).sum()
}

impl AocParser for Solver {
    type Parsed = Vec<Round>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 0)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                parse_round(row).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected `A-C X-Z`, got {:?}",
                        idx + 1,
                        row
                    ))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(rounds: &Vec<Round>) -> Result<String, SolveError> {
        Ok(total_score(rounds, &SHAPE_SCORES).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(rounds: &Vec<Round>) -> Result<String, SolveError> {
        Ok(total_score(rounds, &OUTCOME_SCORES).to_string())
    }
}
