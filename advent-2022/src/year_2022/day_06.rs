use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["sliding-window", "strings"])]
pub struct Solver;

/// Number of characters processed once the last `width` of them are pairwise distinct.
///
/// Returns the stream length when no such window exists.
fn marker_end(stream: &[char], width: usize) -> usize {
    (width..=stream.len())
        .find(|&end| stream[end - width..end].iter().all_unique())
        .unwrap_or(stream.len())
}

impl AocParser for Solver {
    type Parsed = Vec<char>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let stream = nth_group(groups, 0)?
            .rows()
            .next()
            .ok_or_else(|| ParseError::MissingData("empty datastream".into()))?;
        Ok(stream.trim().chars().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(stream: &Vec<char>) -> Result<String, SolveError> {
        Ok(marker_end(stream, 4).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(stream: &Vec<char>) -> Result<String, SolveError> {
        Ok(marker_end(stream, 14).to_string())
    }
}
