//! Error types for the CLI

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// No solver is registered for the requested year
    #[error("Year {0} is not supported")]
    UnsupportedYear(u16),

    /// The site rejected the submitted answer
    #[error("Answer {answer:?} was rejected for {year}/{day:02} part {part}")]
    AnswerRejected {
        year: u16,
        day: u8,
        part: u8,
        answer: String,
    },

    /// The answer spans several lines, which the site never accepts
    #[error("Answer for {year}/{day:02} part {part} spans several lines and cannot be submitted")]
    NotSubmittable { year: u16, day: u8, part: u8 },

    /// The site refused the submission because of rate limiting
    #[error(
        "Submission throttled{}",
        .wait_time.map(|w| format!(", retry in {}s", w.as_secs())).unwrap_or_default()
    )]
    Throttled { wait_time: Option<Duration> },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] advent_client::AocError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] advent_core::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_core::RegistrationError),

    /// Local input file could not be read
    #[error("Failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_message() {
        let err = CliError::Throttled {
            wait_time: Some(Duration::from_secs(42)),
        };
        assert_eq!(err.to_string(), "Submission throttled, retry in 42s");
        assert_eq!(
            CliError::Throttled { wait_time: None }.to_string(),
            "Submission throttled"
        );
    }

    #[test]
    fn test_unsupported_part_message() {
        let err: CliError =
            advent_core::SolverError::from(advent_core::SolveError::PartOutOfRange(3)).into();
        assert!(err.to_string().contains("Part 3 is not supported"));
    }

    #[test]
    fn test_not_submittable_message() {
        let err = CliError::NotSubmittable {
            year: 2022,
            day: 10,
            part: 2,
        };
        assert_eq!(
            err.to_string(),
            "Answer for 2022/10 part 2 spans several lines and cannot be submitted"
        );
    }
}
