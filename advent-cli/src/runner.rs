//! Single-shot fetch, solve and submit flow

use crate::config::Config;
use crate::error::CliError;
use advent_client::{AocClient, SubmissionResult};
use advent_core::{
    Dispatched, Group, RegistryBuilder, SolveError, SolverError, SolverRegistry, split_groups,
};
use chrono::{DateTime, Local};

/// Outcome of a submission attempt
#[derive(Debug, Clone)]
pub struct Submission {
    pub submitted_at: DateTime<Local>,
    pub result: SubmissionResult,
}

/// Answer for the requested part plus the submission, when one was made
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub dispatched: Dispatched,
    pub submission: Option<Submission>,
}

impl RunOutcome {
    /// Turn a rejected or throttled submission into an error
    pub fn into_result(self) -> Result<Self, CliError> {
        match self.submission.as_ref().map(|s| &s.result) {
            Some(SubmissionResult::Incorrect) => Err(CliError::AnswerRejected {
                year: self.dispatched.year,
                day: self.dispatched.day,
                part: self.dispatched.part,
                answer: self.dispatched.result.answer.clone(),
            }),
            Some(SubmissionResult::Throttled { wait_time }) => Err(CliError::Throttled {
                wait_time: *wait_time,
            }),
            _ => Ok(self),
        }
    }
}

/// Build registry with tag filtering
pub fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Reject a year, day or part the registry cannot handle, before any I/O
fn validate(config: &Config, registry: &SolverRegistry) -> Result<(), CliError> {
    if !registry.supports_year(config.year) {
        return Err(CliError::UnsupportedYear(config.year));
    }
    let info = registry
        .info(config.year, config.day)
        .ok_or(SolverError::NotFound(config.year, config.day))?;
    if !(1..=info.parts).contains(&config.part) {
        return Err(SolverError::from(SolveError::PartOutOfRange(config.part)).into());
    }
    Ok(())
}

/// Read the configured input file, or fetch the puzzle input from the site
fn load_groups(config: &Config, client: &AocClient) -> Result<Vec<Group>, CliError> {
    match &config.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading local input");
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(split_groups(&text))
        }
        None => {
            tracing::info!(year = config.year, day = config.day, "fetching puzzle input");
            Ok(client.fetch_input(config.year, config.day)?)
        }
    }
}

/// Solve the configured part and submit it when asked
///
/// Rejected or throttled submissions are returned as a successful
/// `RunOutcome`; use [`RunOutcome::into_result`] once the outcome is printed.
/// Multi-line answers are never sent to the site.
pub fn run(
    config: &Config,
    registry: &SolverRegistry,
    client: &AocClient,
) -> Result<RunOutcome, CliError> {
    validate(config, registry)?;

    let groups = load_groups(config, client)?;
    let dispatched = registry.dispatch(config.year, config.day, config.part, &groups)?;
    tracing::debug!(
        answer = %dispatched.result.answer,
        solve_us = dispatched.result.duration().num_microseconds(),
        "part solved"
    );

    let submission = if config.submit {
        if dispatched.result.answer.contains('\n') {
            return Err(CliError::NotSubmittable {
                year: config.year,
                day: config.day,
                part: config.part,
            });
        }
        tracing::info!(
            year = config.year,
            day = config.day,
            part = config.part,
            "submitting answer"
        );
        let result = client.submit_answer(
            config.year,
            config.day,
            config.part,
            &dispatched.result.answer,
        )?;
        Some(Submission {
            submitted_at: Local::now(),
            result,
        })
    } else {
        None
    };

    Ok(RunOutcome {
        dispatched,
        submission,
    })
}
