//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch, solve and submit Advent of Code puzzles
#[derive(Parser, Debug)]
#[command(name = "my-aoc", about = "Fetch, solve and submit Advent of Code puzzles", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Day to solve
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle year
    #[arg(short, long, default_value_t = 2022)]
    pub year: u16,

    /// Part to solve
    #[arg(short, long, default_value_t = 1)]
    pub part: u8,

    /// Submit the answer to Advent of Code
    #[arg(short, long)]
    pub submit: bool,

    /// Solve a local input file instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Only register solvers carrying all of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging for the harness crates
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List every registered solver
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["my-aoc"]);
        assert_eq!(args.command, None);
        assert_eq!((args.year, args.day, args.part), (2022, 1, 1));
        assert!(!args.submit);
        assert!(args.input.is_none());
        assert!(args.tags.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["my-aoc", "-d", "6", "-y", "2022", "-p", "2", "-s", "-q"]);
        assert_eq!((args.year, args.day, args.part), (2022, 6, 2));
        assert!(args.submit);
        assert!(args.quiet);
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(Args::try_parse_from(["my-aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["my-aoc", "-d", "0"]).is_err());
    }

    #[test]
    fn test_part_is_not_restricted_by_parser() {
        let args = Args::parse_from(["my-aoc", "-p", "3"]);
        assert_eq!(args.part, 3);
    }

    #[test]
    fn test_list_and_tags() {
        let args = Args::parse_from(["my-aoc", "--tags", "grid,simulation", "list"]);
        assert_eq!(args.command, Some(Command::List));
        assert_eq!(args.tags, vec!["grid", "simulation"]);
    }
}
