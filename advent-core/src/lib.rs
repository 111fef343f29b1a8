//! Puzzle input model, solver traits and registry
//!
//! Puzzle text is split into paragraph [`Group`]s once, then handed to a
//! solver looked up by year and day. Every solver implements the same
//! two-part contract and is type-erased behind [`DynSolver`] so the runner can
//! treat all days uniformly.
//!
//! # Quick Example
//!
//! ```
//! use advent_core::{
//!     AocParser, Group, ParseError, RegistryBuilder, SolveError, Solver, split_groups,
//! };
//!
//! pub struct MaxGroup;
//!
//! impl AocParser for MaxGroup {
//!     type Parsed = Vec<u32>;
//!
//!     fn parse(groups: &[Group]) -> Result<Self::Parsed, ParseError> {
//!         groups
//!             .iter()
//!             .map(|g| g.rows().map(|r| r.parse::<u32>().unwrap_or(0)).sum())
//!             .map(Ok)
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MaxGroup {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(sums: &Vec<u32>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(sums.iter().max().copied().unwrap_or(0).to_string()),
//!             2 => Ok(sums.iter().sum::<u32>().to_string()),
//!             _ => Err(SolveError::PartOutOfRange(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MaxGroup>(2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let groups = split_groups("1\n2\n\n7\n");
//! let dispatched = registry.dispatch(2022, 1, 1, &groups).unwrap();
//! assert_eq!(dispatched.result.answer, "7");
//! ```
//!
//! # Plugin registration
//!
//! Solver crates derive `AocSolver` (builds the [`Solver`] impl from
//! `PartSolver<1>`/`PartSolver<2>`) and `AutoRegisterSolver` (submits a
//! [`SolverPlugin`] through `inventory`):
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 1, tags = ["easy"])]
//! pub struct Solver;
//! ```

mod error;
mod group;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use group::{Group, nth_group, split_groups};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    Dispatched, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use advent_macros::{AocSolver, AutoRegisterSolver};
