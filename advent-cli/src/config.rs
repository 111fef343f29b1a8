//! Configuration resolution from CLI args and the environment

use crate::cli::{Args, Command};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Environment variable holding the adventofcode.com `session` cookie
pub const SESSION_ENV: &str = "AOC_SESSION_ID";

/// What the invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Solve one part, optionally submitting it
    Solve,
    /// Print the registered solvers
    List,
}

/// Resolved runtime configuration
pub struct Config {
    pub mode: Mode,
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Whether to submit the answer
    pub submit: bool,
    /// Local input file used instead of fetching
    pub input: Option<PathBuf>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Quiet mode
    pub quiet: bool,
    /// Session key (zeroized on drop), `None` when unset or empty
    pub session: Option<Zeroizing<String>>,
}

impl Config {
    /// Build config from CLI args, reading the session from `AOC_SESSION_ID`
    pub fn from_args(args: Args) -> Self {
        Self::with_session(args, std::env::var(SESSION_ENV).ok())
    }

    /// Build config from CLI args with an explicitly supplied session value
    pub fn with_session(args: Args, session: Option<String>) -> Self {
        let session = session
            .map(Zeroizing::new)
            .filter(|s| !s.trim().is_empty());

        Config {
            mode: match args.command {
                Some(Command::List) => Mode::List,
                None => Mode::Solve,
            },
            year: args.year,
            day: args.day,
            part: args.part,
            submit: args.submit,
            input: args.input,
            tags: args.tags,
            quiet: args.quiet,
            session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_session_is_carried() {
        let args = Args::parse_from(["my-aoc", "-d", "3"]);
        let config = Config::with_session(args, Some("abc123".to_string()));
        assert_eq!(config.session.as_deref().map(String::as_str), Some("abc123"));
        assert_eq!(config.mode, Mode::Solve);
        assert_eq!(config.day, 3);
    }

    #[test]
    fn test_blank_session_is_missing() {
        let args = Args::parse_from(["my-aoc"]);
        assert!(Config::with_session(args, Some("  ".to_string())).session.is_none());
    }

    #[test]
    fn test_list_mode() {
        let args = Args::parse_from(["my-aoc", "list"]);
        assert_eq!(Config::with_session(args, None).mode, Mode::List);
    }
}
