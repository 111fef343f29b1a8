//! Runner behind the `my-aoc` command
//!
//! Resolves CLI flags and the `AOC_SESSION_ID` credential into a [`config::Config`],
//! then fetches (or reads) one day's input, solves one part through the solver
//! registry and optionally submits the answer.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
