//! Answer response parsing

use crate::SubmissionResult;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;

const INCORRECT: &str = "not the right answer";
const ALREADY_COMPLETED: &str = "already complete it";
const THROTTLED: &str = "gave an answer too recently";

fn throttle_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").expect("valid regex"))
}

fn main_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("main").expect("valid selector"))
}

/// Text of the `<main>` element, or of the whole document when there is none
pub(crate) fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);
    match document.select(main_selector()).next() {
        Some(main) => main.text().collect(),
        None => document.root_element().text().collect(),
    }
}

fn extract_throttle_duration(text: &str) -> Option<Duration> {
    let captures = throttle_regex().captures(text)?;
    humantime::parse_duration(captures.get(1)?.as_str()).ok()
}

/// Classify the body of a successful answer POST
pub(crate) fn parse_submission_response(html: &str) -> SubmissionResult {
    let text = extract_main_text(html);

    if text.contains(INCORRECT) {
        SubmissionResult::Incorrect
    } else if text.contains(ALREADY_COMPLETED) {
        SubmissionResult::AlreadyCompleted
    } else if text.contains(THROTTLED) {
        SubmissionResult::Throttled {
            wait_time: extract_throttle_duration(&text),
        }
    } else {
        SubmissionResult::Correct
    }
}
