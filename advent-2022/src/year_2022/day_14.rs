use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use anyhow::{Context, anyhow, bail};
use itertools::Itertools;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["simulation", "sand"])]
pub struct Solver;

type Point = (i32, i32);

const SOURCE: Point = (500, 0);

/// Rock positions scanned from the cave wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cave {
    rock: HashSet<Point>,
    lowest: i32,
}

fn parse_point(text: &str) -> anyhow::Result<Point> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got {:?}", text))?;
    let coord = |s: &str| {
        s.parse::<i32>()
            .with_context(|| format!("invalid coordinate {:?}", s))
    };
    Ok((coord(x)?, coord(y)?))
}

/// Every point on a path of horizontal and vertical segments
fn trace_path(row: &str) -> anyhow::Result<Vec<Point>> {
    let corners = row
        .split("->")
        .map(parse_point)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut points = Vec::new();
    for (&(x1, y1), &(x2, y2)) in corners.iter().tuple_windows() {
        if x1 != x2 && y1 != y2 {
            bail!("diagonal segment {},{} -> {},{}", x1, y1, x2, y2);
        }
        for x in x1.min(x2)..=x1.max(x2) {
            for y in y1.min(y2)..=y1.max(y2) {
                points.push((x, y));
            }
        }
    }
    if let [single] = corners.as_slice() {
        points.push(*single);
    }
    Ok(points)
}

impl Cave {
    /// Where a grain from the source comes to rest, or `None` when it falls past
    /// the lowest rock
    ///
    /// With `floor`, an endless floor lies two units below the lowest rock.
    fn drop_grain(&self, blocked: &HashSet<Point>, floor: bool) -> Option<Point> {
        let (mut x, mut y) = SOURCE;
        loop {
            if y > self.lowest && !floor {
                return None;
            }
            if y == self.lowest + 1 {
                return Some((x, y));
            }
            match [(x, y + 1), (x - 1, y + 1), (x + 1, y + 1)]
                .into_iter()
                .find(|p| !blocked.contains(p))
            {
                Some(next) => (x, y) = next,
                None => return Some((x, y)),
            }
        }
    }

    /// Number of grains that come to rest before sand stops settling
    fn pour(&self, floor: bool) -> usize {
        let mut blocked = self.rock.clone();
        let mut rested = 0;
        while !blocked.contains(&SOURCE) {
            match self.drop_grain(&blocked, floor) {
                Some(grain) => {
                    blocked.insert(grain);
                    rested += 1;
                }
                None => break,
            }
        }
        rested
    }
}

impl AocParser for Solver {
    type Parsed = Cave;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let rock = nth_group(groups, 0)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                trace_path(row).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e))
                })
            })
            .flatten_ok()
            .collect::<Result<HashSet<_>, _>>()?;

        let lowest = rock
            .iter()
            .map(|&(_, y)| y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock paths".to_string()))?;
        if rock.iter().any(|&(_, y)| y < 0) {
            return Err(ParseError::InvalidFormat("rock above the sand source".to_string()));
        }
        Ok(Cave { rock, lowest })
    }
}

impl PartSolver<1> for Solver {
    fn solve(cave: &Cave) -> Result<String, SolveError> {
        Ok(cave.pour(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(cave: &Cave) -> Result<String, SolveError> {
        Ok(cave.pour(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const SAMPLE: &str = "498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    fn parse(text: &str) -> Result<Cave, ParseError> {
        Solver::parse(&[Group::new(text)])
    }

    #[test]
    fn test_sample() {
        let cave = parse(SAMPLE).unwrap();
        assert_eq!(cave.lowest, 9);
        assert_eq!(Solver::solve_part(&cave, 1).unwrap(), "24");
        assert_eq!(Solver::solve_part(&cave, 2).unwrap(), "93");
    }

    #[test]
    fn test_trace_path() {
        let points = trace_path("498,4 -> 498,6 -> 496,6").unwrap();
        let unique: HashSet<_> = points.into_iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(unique.contains(&(497, 6)));
    }

    #[test]
    fn test_single_rock_below_source() {
        let cave = parse("500,2\n").unwrap();
        // Every grain slides off the rock
        assert_eq!(Solver::solve_part(&cave, 1).unwrap(), "0");
        // Floor at y = 4 gives a full triangle of 16 cells minus the rock
        assert_eq!(Solver::solve_part(&cave, 2).unwrap(), "15");
    }

    #[test]
    fn test_diagonal_segment() {
        let result = parse("498,4 -> 500,6\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("diagonal")));
    }

    #[test]
    fn test_no_rock() {
        assert!(matches!(parse(""), Err(ParseError::MissingData(_))));
    }
}
