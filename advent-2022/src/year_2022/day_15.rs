use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError, nth_group,
};
use itertools::Itertools;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["geometry", "intervals"])]
pub struct Solver;

const SCAN_ROW: i64 = 2_000_000;
const SEARCH_LIMIT: i64 = 4_000_000;

type Point = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    position: Point,
    beacon: Point,
}

fn manhattan(a: Point, b: Point) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

impl Sensor {
    fn radius(&self) -> i64 {
        manhattan(self.position, self.beacon)
    }

    fn covers(&self, point: Point) -> bool {
        manhattan(self.position, point) <= self.radius()
    }

    /// Columns of `row` within range, if any
    fn span(&self, row: i64) -> Option<(i64, i64)> {
        let reach = self.radius() - (self.position.1 - row).abs();
        (reach >= 0).then(|| (self.position.0 - reach, self.position.0 + reach))
    }
}

fn sensor_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$",
        )
        .expect("valid regex")
    })
}

fn parse_sensor(row: &str) -> Option<Sensor> {
    let caps = sensor_regex().captures(row.trim())?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<i64>().ok();
    Some(Sensor {
        position: (field(1)?, field(2)?),
        beacon: (field(3)?, field(4)?),
    })
}

/// Positions on `row` where no undetected beacon can be
fn excluded_on_row(sensors: &[Sensor], row: i64) -> i64 {
    let spans = sensors
        .iter()
        .filter_map(|s| s.span(row))
        .sorted_unstable()
        .coalesce(|(a0, a1), (b0, b1)| {
            if b0 <= a1 + 1 {
                Ok((a0, a1.max(b1)))
            } else {
                Err(((a0, a1), (b0, b1)))
            }
        })
        .collect::<Vec<_>>();

    let covered: i64 = spans.iter().map(|(start, end)| end - start + 1).sum();
    let beacons = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|&(x, y)| y == row && spans.iter().any(|&(start, end)| (start..=end).contains(&x)))
        .collect::<HashSet<_>>();
    covered - beacons.len() as i64
}

/// The single position in `0..=limit` on both axes that no sensor covers
///
/// Such a position sits just outside the boundary of several sensors, so it
/// lies where a rising boundary line crosses a falling one.
fn distress_beacon(sensors: &[Sensor], limit: i64) -> Option<Point> {
    // Lines y - x = a and y + x = b one step outside each sensor's range
    let rising: HashSet<i64> = sensors
        .iter()
        .flat_map(|s| {
            let (x, y) = s.position;
            [y - x + s.radius() + 1, y - x - s.radius() - 1]
        })
        .collect();
    let falling: HashSet<i64> = sensors
        .iter()
        .flat_map(|s| {
            let (x, y) = s.position;
            [y + x + s.radius() + 1, y + x - s.radius() - 1]
        })
        .collect();

    rising
        .iter()
        .cartesian_product(falling.iter())
        .filter(|&(a, b)| (b - a) % 2 == 0)
        .map(|(a, b)| ((b - a) / 2, (a + b) / 2))
        .filter(|&(x, y)| (0..=limit).contains(&x) && (0..=limit).contains(&y))
        .find(|&point| sensors.iter().all(|s| !s.covers(point)))
}

impl AocParser for Solver {
    type Parsed = Vec<Sensor>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        nth_group(groups, 0)?
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                parse_sensor(row).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected `Sensor at x=N, y=N: closest beacon is at x=N, y=N`, \
                         got {:?}",
                        idx + 1,
                        row
                    ))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(sensors: &Vec<Sensor>) -> Result<String, SolveError> {
        Ok(excluded_on_row(sensors, SCAN_ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Tuning frequency of the distress beacon
    fn solve(sensors: &Vec<Sensor>) -> Result<String, SolveError> {
        distress_beacon(sensors, SEARCH_LIMIT)
            .map(|(x, y)| (x * SEARCH_LIMIT + y).to_string())
            .ok_or_else(|| SolveError::SolveFailed("no uncovered position in range".into()))
    }
}
