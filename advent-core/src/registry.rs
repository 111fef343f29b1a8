//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolveError, SolverError};
use crate::group::Group;
use crate::instance::{DynSolver, SolveResult, SolverInstance};
use crate::solver::Solver;
use chrono::TimeDelta;
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn Fn(&[Group]) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The registry is immutable once built; duplicate year-day registrations are
/// rejected here.
///
/// # Example
///
/// ```
/// # use advent_core::{AocParser, Group, ParseError, RegistryBuilder, SolveError, Solver};
/// # struct Day1;
/// # impl AocParser for Day1 {
/// #     type Parsed = ();
/// #     fn parse(_: &[Group]) -> Result<(), ParseError> { Ok(()) }
/// # }
/// # impl Solver for Day1 {
/// #     const PARTS: u8 = 2;
/// #     fn solve_part(_: &(), part: u8) -> Result<String, SolveError> { Ok(part.to_string()) }
/// # }
/// let registry = RegistryBuilder::new()
///     .register_solver::<Day1>(2022, 1)
///     .unwrap()
///     .build();
/// assert!(registry.info(2022, 1).is_some());
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate solver for this year-day combination
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(&[Group]) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        tracing::debug!(year, day, parts, "registering solver");
        self.solvers.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a `Solver` type, wrapping it in a parsing factory
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |groups: &[Group]| {
            let instance = SolverInstance::<S>::new(year, day, groups)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_core::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2022)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Answer for one dispatched part, with the parse and solve timings
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Time spent turning the groups into the solver's parsed input
    pub parse_duration: TimeDelta,
    pub result: SolveResult,
}

/// Immutable registry mapping (year, day) to solver factories
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Metadata for the solver registered at year/day, if any
    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.solvers.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Iterate over metadata for all registered solvers, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Whether at least one solver is registered for `year`
    pub fn supports_year(&self, year: u16) -> bool {
        self.solvers.keys().any(|&(y, _)| y == year)
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        groups: &[Group],
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(groups).map_err(SolverError::ParseError)
    }

    /// Look up the solver for year/day and run one part over the groups
    ///
    /// The part is checked against the solver's part count before the input is
    /// parsed.
    ///
    /// # Returns
    /// * `Err(SolverError::NotFound)` - No solver for this day
    /// * `Err(SolverError::SolveError(SolveError::PartOutOfRange))` - Unsupported part
    /// * `Err(SolverError::ParseError)` - Input did not match the day's format
    pub fn dispatch(
        &self,
        year: u16,
        day: u8,
        part: u8,
        groups: &[Group],
    ) -> Result<Dispatched, SolverError> {
        let info = self.info(year, day).ok_or(SolverError::NotFound(year, day))?;
        if !(1..=info.parts).contains(&part) {
            return Err(SolveError::PartOutOfRange(part).into());
        }

        let solver = self.create_solver(year, day, groups)?;
        let result = solver.solve(part)?;
        tracing::debug!(year, day, part, "solved");

        Ok(Dispatched {
            year,
            day,
            part,
            parse_duration: solver.parse_duration(),
            result,
        })
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Has no associated types so different solver types can be collected as
/// trait objects. Every `Solver` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted through `inventory` by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "2022", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
