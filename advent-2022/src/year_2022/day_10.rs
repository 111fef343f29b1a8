use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::{Context, bail};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["cpu", "render"])]
pub struct Solver;

const SAMPLE_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];
const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

/// Value of the X register during each cycle of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTrace {
    during: Vec<i64>,
    /// Value left in X once the program halts
    last: i64,
}

impl RegisterTrace {
    /// X during the 1-based `cycle`; the register holds its last value after the program halts
    fn x_at(&self, cycle: usize) -> i64 {
        cycle
            .checked_sub(1)
            .and_then(|idx| self.during.get(idx))
            .copied()
            .unwrap_or(self.last)
    }
}

fn execute(trace: &mut RegisterTrace, row: &str) -> anyhow::Result<()> {
    let mut words = row.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("noop"), None, None) => trace.during.push(trace.last),
        (Some("addx"), Some(value), None) => {
            let value = value
                .parse::<i64>()
                .with_context(|| format!("invalid addx operand {:?}", value))?;
            trace.during.extend([trace.last, trace.last]);
            trace.last += value;
        }
        _ => bail!("unknown instruction {:?}", row),
    }
    Ok(())
}

impl AocParser for Solver {
    type Parsed = RegisterTrace;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let mut trace = RegisterTrace {
            during: Vec::new(),
            last: 1,
        };
        for (idx, row) in groups.iter().flat_map(Group::rows).enumerate() {
            execute(&mut trace, row)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e)))?;
        }
        Ok(trace)
    }
}

impl PartSolver<1> for Solver {
    fn solve(trace: &RegisterTrace) -> Result<String, SolveError> {
        let strength: i64 = SAMPLE_CYCLES
            .iter()
            .map(|&cycle| cycle as i64 * trace.x_at(cycle))
            .sum();
        Ok(strength.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Rows of the CRT separated by newlines, `#` for lit pixels
    fn solve(trace: &RegisterTrace) -> Result<String, SolveError> {
        let screen = (0..SCREEN_HEIGHT)
            .map(|row| {
                (0..SCREEN_WIDTH)
                    .map(|col| {
                        let sprite = trace.x_at(row * SCREEN_WIDTH + col + 1);
                        if (sprite - col as i64).abs() <= 1 { '#' } else { '.' }
                    })
                    .collect::<String>()
            })
            .join("\n");
        Ok(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver as _;

    const SAMPLE: &str = "addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    fn trace(text: &str) -> RegisterTrace {
        Solver::parse(&[Group::new(text)]).unwrap()
    }

    #[test]
    fn test_small_program() {
        let trace = trace("noop\naddx 3\naddx -5\n");
        assert_eq!(trace.during, vec![1, 1, 1, 4, 4]);
        assert_eq!(trace.last, -1);
    }

    #[test]
    fn test_sample_signal_strength() {
        assert_eq!(Solver::solve_part(&trace(SAMPLE), 1).unwrap(), "13140");
    }

    #[test]
    fn test_sample_render() {
        let expected = "##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(Solver::solve_part(&trace(SAMPLE), 2).unwrap(), expected);
    }

    #[test]
    fn test_noop_program() {
        let program = "noop\n".repeat(220);
        assert_eq!(Solver::solve_part(&trace(&program), 1).unwrap(), "720");

        let screen = Solver::solve_part(&trace(&program), 2).unwrap();
        let row = format!("###{}", ".".repeat(37));
        assert!(screen.lines().all(|line| line == row));
        assert_eq!(screen.lines().count(), 6);
    }

    #[test]
    fn test_register_holds_after_halt() {
        let trace = trace("addx 4\n");
        assert_eq!(trace.x_at(1), 1);
        assert_eq!(trace.x_at(2), 1);
        assert_eq!(trace.x_at(3), 5);
        assert_eq!(Solver::solve_part(&trace, 1).unwrap(), "3600");
    }

    #[test]
    fn test_unknown_instruction() {
        assert!(Solver::parse(&[Group::new("noop\nmul 3\n")]).is_err());
    }
}
