//! Core solver traits

use crate::error::{ParseError, SolveError};
use crate::group::Group;

/// Trait for parsing puzzle input groups into the data both parts work on
///
/// # Example
///
/// ```
/// use advent_core::{AocParser, Group, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i32>;
///
///     fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
///         groups
///             .iter()
///             .flat_map(Group::rows)
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Owned representation of the parsed input
    type Parsed: 'static;

    /// Parse the input groups into the solver's data structure.
    fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1 or 2).
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - The input could not be solved
    fn solve(parsed: &Self::Parsed) -> Result<String, SolveError>;
}

/// Two-part contract every registered solver implements
///
/// Usually generated by `#[derive(AocSolver)]`, which dispatches to the
/// type's `PartSolver<N>` impls.
///
/// # Example
///
/// ```
/// use advent_core::{AocParser, Group, ParseError, SolveError, Solver};
///
/// struct Counter;
///
/// impl AocParser for Counter {
///     type Parsed = usize;
///
///     fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
///         Ok(groups.len())
///     }
/// }
///
/// impl Solver for Counter {
///     const PARTS: u8 = 2;
///
///     fn solve_part(parsed: &usize, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(parsed.to_string()),
///             2 => Ok((parsed * 2).to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(parsed: &Self::Parsed, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
