use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use anyhow::{Context, bail};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["voxels", "flood-fill"])]
pub struct Solver;

type Cube = (i32, i32, i32);

const FACES: [Cube; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

fn neighbours((x, y, z): Cube) -> impl Iterator<Item = Cube> {
    FACES.into_iter().map(move |(dx, dy, dz)| (x + dx, y + dy, z + dz))
}

fn parse_cube(row: &str) -> anyhow::Result<Cube> {
    let coords = row
        .trim()
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<i32>()
                .with_context(|| format!("invalid coordinate {:?}", c))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    match coords.as_slice() {
        &[x, y, z] => Ok((x, y, z)),
        _ => bail!("expected `x,y,z`, got {:?}", row),
    }
}

/// Faces not shared with another cube, including those of internal air pockets
fn surface_area(droplet: &HashSet<Cube>) -> usize {
    droplet
        .iter()
        .flat_map(|&cube| neighbours(cube))
        .filter(|n| !droplet.contains(n))
        .count()
}

/// Faces reachable by steam flowing around the droplet
fn exterior_surface_area(droplet: &HashSet<Cube>) -> usize {
    let Some(first) = droplet.iter().next() else {
        return 0;
    };
    // Bounding box grown by one so steam can wrap around every side
    let (mut min, mut max) = (*first, *first);
    for &(x, y, z) in droplet {
        min = (min.0.min(x - 1), min.1.min(y - 1), min.2.min(z - 1));
        max = (max.0.max(x + 1), max.1.max(y + 1), max.2.max(z + 1));
    }
    let inside = |(x, y, z): Cube| {
        (min.0..=max.0).contains(&x) && (min.1..=max.1).contains(&y) && (min.2..=max.2).contains(&z)
    };

    let mut steam = HashSet::from([min]);
    let mut frontier = vec![min];
    let mut faces = 0;
    while let Some(cell) = frontier.pop() {
        for next in neighbours(cell).filter(|&n| inside(n)) {
            if droplet.contains(&next) {
                faces += 1;
            } else if steam.insert(next) {
                frontier.push(next);
            }
        }
    }
    faces
}

impl AocParser for Solver {
    type Parsed = HashSet<Cube>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 0)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                parse_cube(row)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(droplet: &HashSet<Cube>) -> Result<String, SolveError> {
        Ok(surface_area(droplet).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(droplet: &HashSet<Cube>) -> Result<String, SolveError> {
        Ok(exterior_surface_area(droplet).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const SAMPLE: &str = "2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    fn solve(text: &str, part: u8) -> String {
        let parsed = Solver::parse(&[Group::new(text)]).unwrap();
        Solver::solve_part(&parsed, part).unwrap()
    }

    #[test]
    fn test_two_adjacent_cubes() {
        assert_eq!(solve("1,1,1\n2,1,1\n", 1), "10");
        assert_eq!(solve("1,1,1\n2,1,1\n", 2), "10");
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve(SAMPLE, 1), "64");
        assert_eq!(solve(SAMPLE, 2), "58");
    }

    #[test]
    fn test_hollow_cube_hides_inner_faces() {
        // 3x3x3 shell with the centre missing
        let shell: String = (0..3)
            .flat_map(|x| (0..3).flat_map(move |y| (0..3).map(move |z| (x, y, z))))
            .filter(|&cube| cube != (1, 1, 1))
            .map(|(x, y, z)| format!("{},{},{}\n", x, y, z))
            .collect();
        assert_eq!(solve(&shell, 1), "60");
        assert_eq!(solve(&shell, 2), "54");
    }

    #[test]
    fn test_bad_coordinate_count() {
        let result = Solver::parse(&[Group::new("1,1,1\n1,2\n")]);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("line 2")));
    }
}
