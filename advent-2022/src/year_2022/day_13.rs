use advent_core::{
    AocParser, AocSolver, AutoRegisterSolver, Group, ParseError, PartSolver, SolveError,
};
use anyhow::{Context, bail};
use std::cmp::Ordering;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["recursion", "ordering"])]
pub struct Solver;

/// Distress signal packet: an integer or a list of packets
#[derive(Debug, Clone)]
pub enum Packet {
    Integer(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            // A lone integer compares as a list holding just that integer
            (Packet::Integer(_), Packet::List(b)) => std::slice::from_ref(self).cmp(b.as_slice()),
            (Packet::List(a), Packet::Integer(_)) => a.as_slice().cmp(std::slice::from_ref(other)),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

struct PacketReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl PacketReader<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn packet(&mut self) -> anyhow::Result<Packet> {
        match self.peek() {
            Some(b'[') => {
                self.pos += 1;
                let mut items = Vec::new();
                if self.peek() == Some(b']') {
                    self.pos += 1;
                    return Ok(Packet::List(items));
                }
                loop {
                    items.push(self.packet()?);
                    match self.bump() {
                        Some(b',') => {}
                        Some(b']') => return Ok(Packet::List(items)),
                        other => bail!(
                            "expected `,` or `]` at column {}, got {:?}",
                            self.pos,
                            other.map(char::from)
                        ),
                    }
                }
            }
            Some(b) if b.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
                let digits = &self.bytes[start..self.pos];
                std::str::from_utf8(digits)
                    .ok()
                    .and_then(|text| text.parse::<u32>().ok())
                    .map(Packet::Integer)
                    .with_context(|| format!("integer out of range at column {}", start + 1))
            }
            other => bail!(
                "expected `[` or a digit at column {}, got {:?}",
                self.pos + 1,
                other.map(char::from)
            ),
        }
    }
}

fn parse_packet(text: &str) -> anyhow::Result<Packet> {
    let mut reader = PacketReader {
        bytes: text.trim().as_bytes(),
        pos: 0,
    };
    let packet = reader.packet()?;
    if reader.pos != reader.bytes.len() {
        bail!("trailing data after column {}", reader.pos);
    }
    Ok(packet)
}

fn divider(value: u32) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Integer(value)])])
}

impl AocParser for Solver {
    /// Packet pairs in input order
    type Parsed = Vec<(Packet, Packet)>;

    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
        groups
            .iter()
            .filter(|group| group.rows().next().is_some())
            .enumerate()
            .map(|(idx, group)| -> anyhow::Result<(Packet, Packet)> {
                let rows: Vec<&str> = group.rows().collect();
                let &[left, right] = rows.as_slice() else {
                    bail!("(pair {}) expected 2 packets, got {}", idx + 1, rows.len());
                };
                let packet = |text: &str| {
                    parse_packet(text).with_context(|| format!("(pair {})", idx + 1))
                };
                Ok((packet(left)?, packet(right)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(pairs: &Vec<(Packet, Packet)>) -> Result<String, SolveError> {
        let sum: usize = pairs
            .iter()
            .enumerate()
            .filter(|(_, (left, right))| left < right)
            .map(|(idx, _)| idx + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(pairs: &Vec<(Packet, Packet)>) -> Result<String, SolveError> {
        // Position of each divider in the sorted list, without sorting
        let (first, second) = (divider(2), divider(6));
        let packets = pairs.iter().flat_map(|(left, right)| [left, right]);
        let before_first = packets.clone().filter(|&p| *p < first).count() + 1;
        let before_second = packets.filter(|&p| *p < second).count() + 2;
        Ok((before_first * before_second).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{Solver as _, split_groups};

    const SAMPLE: &str = "[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    fn packet(text: &str) -> Packet {
        parse_packet(text).unwrap()
    }

    #[test]
    fn test_sample() {
        let pairs = Solver::parse(&split_groups(SAMPLE)).unwrap();
        assert_eq!(pairs.len(), 8);
        assert_eq!(Solver::solve_part(&pairs, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&pairs, 2).unwrap(), "140");
    }

    #[test]
    fn test_mixed_types_compare_as_lists() {
        assert!(packet("[[1],[2,3,4]]") < packet("[[1],4]"));
        assert_eq!(packet("[[[3]]]"), packet("[3]"));
        assert!(packet("[10]") > packet("[9,9]"));
    }

    #[test]
    fn test_shorter_list_runs_out_first() {
        assert!(packet("[]") < packet("[3]"));
        assert!(packet("[[[]]]") > packet("[[]]"));
        assert!(packet("[7,7,7,7]") > packet("[7,7,7]"));
    }

    #[test]
    fn test_malformed_packets() {
        assert!(parse_packet("[1,2").is_err());
        assert!(parse_packet("[1,,2]").is_err());
        assert!(parse_packet("[1]]").is_err());
        assert!(parse_packet("[a]").is_err());
    }

    #[test]
    fn test_pair_needs_two_packets() {
        let result = Solver::parse(&split_groups("[1]\n[2]\n\n[3]\n"));
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("pair 2")));
    }
}
