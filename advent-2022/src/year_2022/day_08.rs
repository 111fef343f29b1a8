use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

/// Rectangular grid of tree heights, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    heights: Vec<u8>,
    width: usize,
    height: usize,
}

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Forest {
    fn at(&self, row: usize, col: usize) -> u8 {
        self.heights[row * self.width + col]
    }

    /// Positions walking from (row, col) towards the edge, excluding the start
    fn line_of_sight(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> impl Iterator<Item = u8> + '_ {
        (1..)
            .map(move |step| {
                let r = row.checked_add_signed(dr * step)?;
                let c = col.checked_add_signed(dc * step)?;
                (r < self.height && c < self.width).then(|| self.at(r, c))
            })
            .take_while(Option::is_some)
            .flatten()
    }

    fn is_visible(&self, row: usize, col: usize) -> bool {
        let tree = self.at(row, col);
        DIRECTIONS
            .iter()
            .any(|&dir| self.line_of_sight(row, col, dir).all(|other| other < tree))
    }

    fn scenic_score(&self, row: usize, col: usize) -> usize {
        let tree = self.at(row, col);
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let mut seen = 0;
                for other in self.line_of_sight(row, col, dir) {
                    seen += 1;
                    if other >= tree {
                        break;
                    }
                }
                seen
            })
            .product()
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }
}

impl AocParser for Solver {
    type Parsed = Forest;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let mut heights = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (idx, row) in groups.iter().flat_map(Group::rows).map(str::trim).enumerate() {
            if *width.get_or_insert(row.len()) != row.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) row length {} differs from the first row",
                    idx + 1,
                    row.len()
                )));
            }
            for b in row.bytes() {
                if !b.is_ascii_digit() {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) tree height must be a digit: {:?}",
                        idx + 1,
                        row
                    )));
                }
                heights.push(b - b'0');
            }
            height += 1;
        }

        Ok(Forest {
            heights,
            width: width.unwrap_or(0),
            height,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(forest: &Forest) -> Result<String, SolveError> {
        let visible = forest
            .positions()
            .filter(|&(row, col)| forest.is_visible(row, col))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(forest: &Forest) -> Result<String, SolveError> {
        let best = forest
            .positions()
            .map(|(row, col)| forest.scenic_score(row, col))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
