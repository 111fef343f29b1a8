use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::{Context, anyhow, bail};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["simulation", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    step: (i32, i32),
    count: u32,
}

fn parse_motion(row: &str) -> anyhow::Result<Motion> {
    let (direction, count) = row
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `<R|L|U|D> N`, got {:?}", row))?;
    let step = match direction {
        "R" => (1, 0),
        "L" => (-1, 0),
        "U" => (0, 1),
        "D" => (0, -1),
        other => bail!("unknown direction {:?}", other),
    };
    let count = count.parse::<u32>().with_context(|| format!("invalid step count {:?}", count))?;
    Ok(Motion { step, count })
}

/// Pull `knot` one step towards `leader` when they no longer touch
fn follow(leader: (i32, i32), knot: &mut (i32, i32)) {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() > 1 || dy.abs() > 1 {
        knot.0 += dx.signum();
        knot.1 += dy.signum();
    }
}

/// Number of distinct cells the last of `knots` visits
fn tail_positions(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0, 0); knots];
    let mut visited = HashSet::from([(0, 0)]);

    for motion in motions {
        for _ in 0..motion.count {
            rope[0].0 += motion.step.0;
            rope[0].1 += motion.step.1;
            for i in 1..rope.len() {
                let leader = rope[i - 1];
                follow(leader, &mut rope[i]);
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

impl AocParser for Solver {
    type Parsed = Vec<Motion>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        groups
            .iter()
            .flat_map(Group::rows)
            .enumerate()
            .map(|(idx, row)| parse_motion(row).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(motions: &Vec<Motion>) -> Result<String, SolveError> {
        Ok(tail_positions(motions, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(motions: &Vec<Motion>) -> Result<String, SolveError> {
        Ok(tail_positions(motions, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    fn solve(text: &str, part: u8) -> String {
        let parsed = Solver::parse(&[Group::new(text)]).unwrap();
        Solver::solve_part(&parsed, part).unwrap()
    }

    #[test]
    fn test_sample() {
        let sample = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
        assert_eq!(solve(sample, 1), "13");
        assert_eq!(solve(sample, 2), "1");
    }

    #[test]
    fn test_larger_sample() {
        let sample = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";
        assert_eq!(solve(sample, 2), "36");
    }

    #[test]
    fn test_diagonal_catch_up() {
        let mut knot = (0, 0);
        follow((1, 2), &mut knot);
        assert_eq!(knot, (1, 1));
        follow((1, 2), &mut knot);
        assert_eq!(knot, (1, 1));
    }

    #[test]
    fn test_unknown_direction() {
        let result = Solver::parse(&[Group::new("R 1\nX 2\n")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }
}
