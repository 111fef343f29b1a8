//! Blocking client for the Advent of Code website
//!
//! Fetches puzzle input (split into blank-line-delimited groups) and submits
//! answers on behalf of the account whose `session` cookie the client was
//! built with.
//!
//! # Features
//!
//! - Explicit session credential, sent as a sensitive cookie and zeroized on drop
//! - Submission responses classified from the page's `<main>` text
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Redirects are never followed, so a stale session shows up as an error status
//!
//! # Example
//!
//! ```no_run
//! use advent_client::{AocClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::builder()
//!     .session("your_session_cookie_here")
//!     .build()?;
//!
//! // Fetch puzzle input
//! let groups = client.fetch_input(2022, 1)?;
//! println!("first group:\n{}", groups[0]);
//!
//! // Submit an answer
//! let result = client.submit_answer(2022, 1, 1, "42")?;
//! match result {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect => println!("Incorrect"),
//!     SubmissionResult::AlreadyCompleted => println!("Already done"),
//!     SubmissionResult::Throttled { wait_time } => {
//!         println!("Throttled: {:?}", wait_time);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SubmissionResult};
pub use error::AocError;
