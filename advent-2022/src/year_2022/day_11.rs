use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::{Context, anyhow, bail};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["simulation", "modular"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Constant(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Multiply(Operand),
}

impl Operation {
    /// New worry level, or `None` when it no longer fits in a `u64`
    fn apply(self, old: u64) -> Option<u64> {
        let value = |operand| match operand {
            Operand::Old => old,
            Operand::Constant(c) => c,
        };
        match self {
            Operation::Add(operand) => old.checked_add(value(operand)),
            Operation::Multiply(operand) => old.checked_mul(value(operand)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

impl Monkey {
    fn target(&self, worry: u64) -> usize {
        if worry % self.divisor == 0 {
            self.if_true
        } else {
            self.if_false
        }
    }
}

/// Value after `prefix` on the next row, ignoring indentation
fn field<'a>(rows: &mut impl Iterator<Item = &'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    let row = rows.next().with_context(|| format!("missing `{}` line", prefix))?;
    row.trim()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected `{}`, got {:?}", prefix, row))
}

fn number<'a>(rows: &mut impl Iterator<Item = &'a str>, prefix: &str) -> anyhow::Result<u64> {
    let text = field(rows, prefix)?;
    text.parse::<u64>()
        .with_context(|| format!("invalid number {:?}", text))
}

fn parse_operation(text: &str) -> anyhow::Result<Operation> {
    let mut words = text.split_whitespace();
    let (Some("old"), Some(op), Some(operand), None) =
        (words.next(), words.next(), words.next(), words.next())
    else {
        bail!("expected `old <+|*> <old|N>`, got {:?}", text);
    };
    let operand = match operand {
        "old" => Operand::Old,
        n => Operand::Constant(
            n.parse::<u64>()
                .with_context(|| format!("invalid operand {:?}", n))?,
        ),
    };
    match op {
        "+" => Ok(Operation::Add(operand)),
        "*" => Ok(Operation::Multiply(operand)),
        other => bail!("unsupported operator {:?}", other),
    }
}

fn parse_monkey(index: usize, group: &Group) -> anyhow::Result<Monkey> {
    let mut rows = group.rows();

    let header = field(&mut rows, "Monkey")?;
    if header.strip_suffix(':') != Some(index.to_string().as_str()) {
        bail!("expected `Monkey {}:`, got {:?}", index, header);
    }

    let items = field(&mut rows, "Starting items:")?
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<u64>()
                .with_context(|| format!("invalid item {:?}", item))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let operation = parse_operation(field(&mut rows, "Operation: new =")?)?;

    let divisor = number(&mut rows, "Test: divisible by")?;
    if divisor == 0 {
        bail!("divisor must be positive");
    }
    let if_true = number(&mut rows, "If true: throw to monkey")? as usize;
    let if_false = number(&mut rows, "If false: throw to monkey")? as usize;

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true,
        if_false,
    })
}

/// Product of the two largest inspection counts after `rounds` rounds
///
/// `relieve` is applied to every worry level after the monkey's operation.
fn monkey_business(
    monkeys: &[Monkey],
    rounds: usize,
    relieve: impl Fn(u64) -> u64,
) -> Result<u64, SolveError> {
    let mut held: Vec<Vec<u64>> = monkeys.iter().map(|m| m.items.clone()).collect();
    let mut inspected = vec![0u64; monkeys.len()];

    for round in 0..rounds {
        for (idx, monkey) in monkeys.iter().enumerate() {
            let items = std::mem::take(&mut held[idx]);
            inspected[idx] += items.len() as u64;
            for item in items {
                let worry = monkey.operation.apply(item).ok_or_else(|| {
                    let message =
                        format!("worry level overflow at monkey {} in round {}", idx, round + 1);
                    SolveError::SolveFailed(message.into())
                })?;
                let worry = relieve(worry);
                held[monkey.target(worry)].push(worry);
            }
        }
    }

    Ok(inspected
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(2)
        .product())
}

impl AocParser for Solver {
    type Parsed = Vec<Monkey>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        let monkeys = groups
            .iter()
            .filter(|group| group.rows().next().is_some())
            .enumerate()
            .map(|(idx, group)| {
                parse_monkey(idx, group)
                    .map_err(|e| ParseError::InvalidFormat(format!("(monkey {}) {:#}", idx, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if monkeys.is_empty() {
            return Err(ParseError::MissingData("no monkeys in input".to_string()));
        }
        for (idx, monkey) in monkeys.iter().enumerate() {
            for target in [monkey.if_true, monkey.if_false] {
                if target == idx || target >= monkeys.len() {
                    return Err(ParseError::InvalidFormat(format!(
                        "(monkey {}) cannot throw to monkey {}",
                        idx, target
                    )));
                }
            }
        }
        Ok(monkeys)
    }
}

impl PartSolver<1> for Solver {
    fn solve(monkeys: &Vec<Monkey>) -> Result<String, SolveError> {
        monkey_business(monkeys, 20, |worry| worry / 3).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(monkeys: &Vec<Monkey>) -> Result<String, SolveError> {
        // Every divisibility test survives reduction modulo the product of the divisors
        let modulus = monkeys
            .iter()
            .try_fold(1u64, |acc, m| acc.checked_mul(m.divisor))
            .ok_or_else(|| SolveError::SolveFailed("divisor product overflows".into()))?;
        monkey_business(monkeys, 10_000, |worry| worry % modulus).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{Solver as _, split_groups};

    const SAMPLE: &str = "Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    fn parse(text: &str) -> Result<Vec<Monkey>, ParseError> {
        Solver::parse(&split_groups(text))
    }

    #[test]
    fn test_sample() {
        let monkeys = parse(SAMPLE).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(Solver::solve_part(&monkeys, 1).unwrap(), "10605");
        assert_eq!(Solver::solve_part(&monkeys, 2).unwrap(), "2713310158");
    }

    #[test]
    fn test_parse_monkey() {
        let monkeys = parse(SAMPLE).unwrap();
        assert_eq!(
            monkeys[2],
            Monkey {
                items: vec![79, 60, 97],
                operation: Operation::Multiply(Operand::Old),
                divisor: 13,
                if_true: 1,
                if_false: 3,
            }
        );
    }

    #[test]
    fn test_operations() {
        assert_eq!(Operation::Add(Operand::Constant(6)).apply(4), Some(10));
        assert_eq!(Operation::Multiply(Operand::Old).apply(7), Some(49));
        assert_eq!(Operation::Multiply(Operand::Old).apply(u64::MAX), None);
    }

    #[test]
    fn test_unsupported_operator() {
        let text = SAMPLE.replace("old + 6", "old - 6");
        let result = parse(&text);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("monkey 1")));
    }

    #[test]
    fn test_throw_target_out_of_range() {
        let text = SAMPLE.replace("If false: throw to monkey 1", "If false: throw to monkey 7");
        let result = parse(&text);
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("monkey 7")));
    }

    #[test]
    fn test_monkeys_out_of_order() {
        let text = SAMPLE.replace("Monkey 1:", "Monkey 5:");
        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(ParseError::MissingData(_))));
    }
}
