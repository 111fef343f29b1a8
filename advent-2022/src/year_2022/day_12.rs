use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["grid", "bfs"])]
pub struct Solver;

/// Elevations `a`..=`z` stored as 0..=25, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    elevations: Vec<u8>,
    width: usize,
    start: usize,
    end: usize,
}

impl Heightmap {
    fn neighbours(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = (pos / self.width, pos % self.width);
        let height = self.elevations.len() / self.width;
        [
            (row > 0).then(|| pos - self.width),
            (row + 1 < height).then(|| pos + self.width),
            (col > 0).then(|| pos - 1),
            (col + 1 < self.width).then(|| pos + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Fewest steps from every position to the end, walking the climbing rule backwards
    ///
    /// A step may climb at most one unit and descend any amount.
    fn steps_to_end(&self) -> Vec<Option<usize>> {
        let mut steps = vec![None; self.elevations.len()];
        steps[self.end] = Some(0);
        let mut queue = VecDeque::from([(self.end, 0)]);

        while let Some((pos, dist)) = queue.pop_front() {
            for prev in self.neighbours(pos) {
                if steps[prev].is_none() && self.elevations[pos] <= self.elevations[prev] + 1 {
                    steps[prev] = Some(dist + 1);
                    queue.push_back((prev, dist + 1));
                }
            }
        }
        steps
    }
}

fn no_path(from: &str) -> SolveError {
    SolveError::SolveFailed(format!("no path from {} to the best signal", from).into())
}

impl AocParser for Solver {
    type Parsed = Heightmap;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let mut elevations = Vec::new();
        let mut width = None;
        let (mut start, mut end) = (None, None);

        for (idx, row) in nth_group(groups, 0)?.rows().map(str::trim).enumerate() {
            if *width.get_or_insert(row.len()) != row.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) row length {} differs from the first row",
                    idx + 1,
                    row.len()
                )));
            }
            for b in row.bytes() {
                let elevation = match b {
                    b'S' => {
                        start.get_or_insert(elevations.len());
                        b'a'
                    }
                    b'E' => {
                        end.get_or_insert(elevations.len());
                        b'z'
                    }
                    b'a'..=b'z' => b,
                    _ => {
                        return Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected square {:?}",
                            idx + 1,
                            char::from(b)
                        )));
                    }
                };
                elevations.push(elevation - b'a');
            }
        }

        let width = width
            .filter(|&w| w > 0)
            .ok_or_else(|| ParseError::MissingData("empty heightmap".to_string()))?;
        let start = start.ok_or_else(|| ParseError::MissingData("no start `S`".to_string()))?;
        let end = end.ok_or_else(|| ParseError::MissingData("no end `E`".to_string()))?;
        Ok(Heightmap {
            elevations,
            width,
            start,
            end,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &Heightmap) -> Result<String, SolveError> {
        map.steps_to_end()[map.start]
            .map(|steps| steps.to_string())
            .ok_or_else(|| no_path("the start"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &Heightmap) -> Result<String, SolveError> {
        map.steps_to_end()
            .into_iter()
            .zip(&map.elevations)
            .filter(|&(_, &elevation)| elevation == 0)
            .filter_map(|(steps, _)| steps)
            .min()
            .map(|steps| steps.to_string())
            .ok_or_else(|| no_path("any lowest square"))
    }
}
