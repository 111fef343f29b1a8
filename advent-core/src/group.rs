//! Paragraph-delimited puzzle input

use crate::error::ParseError;
use std::fmt;

/// One blank-line-delimited block of puzzle input
///
/// Groups are produced once when the input is fetched (or read from disk) and
/// are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    contents: String,
}

impl Group {
    /// Create a group from raw text
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// The raw text of this group, including any trailing newline
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Iterate over the data rows of this group
    ///
    /// Iteration stops at the first empty row, so the trailing newline that
    /// terminates the last group of a puzzle input never shows up as a row.
    pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
        self.contents
            .split('\n')
            .map(|row| row.strip_suffix('\r').unwrap_or(row))
            .take_while(|row| !row.is_empty())
    }
}

impl From<&str> for Group {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Group {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}

/// Split puzzle text into groups on blank-line boundaries
///
/// # Example
///
/// ```
/// use advent_core::split_groups;
///
/// let groups = split_groups("1\n2\n\n3\n");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[1].contents(), "3\n");
/// ```
pub fn split_groups(text: &str) -> Vec<Group> {
    text.split("\n\n").map(Group::new).collect()
}

/// Fetch the group at `index`, reporting a parse error when the input is too short
pub fn nth_group(groups: &[Group], index: usize) -> Result<&Group, ParseError> {
    groups.get(index).ok_or_else(|| {
        ParseError::MissingData(format!(
            "expected at least {} input group(s), got {}",
            index + 1,
            groups.len()
        ))
    })
}
