//! Output formatting for run outcomes

use crate::runner::{RunOutcome, Submission};
use advent_client::SubmissionResult;
use advent_core::FactoryInfo;
use chrono::TimeDelta;

/// Output formatter for run outcomes
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the outcome of a run
    pub fn print_outcome(&self, outcome: &RunOutcome) {
        if self.quiet {
            println!("{}", outcome.dispatched.result.answer);
        } else {
            println!("{}", format_outcome_line(outcome));
        }
    }

    /// Print every registered solver, one per line
    pub fn print_solvers(&self, solvers: impl Iterator<Item = FactoryInfo>) {
        for info in solvers {
            if self.quiet {
                println!("{}/{:02}", info.year, info.day);
            } else {
                println!("{}/{:02} ({} parts)", info.year, info.day, info.parts);
            }
        }
    }
}

/// Full outcome line with timing and submission info
///
/// Multi-line answers (rendered screens) start on their own line.
pub fn format_outcome_line(outcome: &RunOutcome) -> String {
    let dispatched = &outcome.dispatched;
    let prefix = format!(
        "{}/{:02} Part {}",
        dispatched.year, dispatched.day, dispatched.part
    );

    let answer = &dispatched.result.answer;
    let answer = if answer.contains('\n') {
        format!("\n{}\n", answer)
    } else {
        answer.clone()
    };

    let submission_info = outcome
        .submission
        .as_ref()
        .map(|s| {
            format!(
                ", submitted {}: {}",
                s.submitted_at.format("%H:%M:%S"),
                format_submission(s)
            )
        })
        .unwrap_or_default();

    format!(
        "{}: {} (parse: {}, solve: {}{})",
        prefix,
        answer,
        format_duration(dispatched.parse_duration),
        format_duration(dispatched.result.duration()),
        submission_info
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a submission outcome for display
fn format_submission(submission: &Submission) -> String {
    match &submission.result {
        SubmissionResult::Correct => "✓ Correct".to_string(),
        SubmissionResult::Incorrect => "✗ Incorrect".to_string(),
        SubmissionResult::AlreadyCompleted => "⏭ Already completed".to_string(),
        SubmissionResult::Throttled { wait_time } => match wait_time {
            Some(d) => format!("⏳ Throttled (wait {}s)", d.as_secs()),
            None => "⏳ Throttled".to_string(),
        },
    }
}
