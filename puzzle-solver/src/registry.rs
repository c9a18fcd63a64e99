//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::HashMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>>;

/// Builder for constructing a [`SolverRegistry`].
///
/// Registration is chainable and detects duplicate year-day
/// combinations; the registry is immutable once built.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: HashMap<(u16, u8), SolverFactory>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: HashMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day.
    ///
    /// Returns an error if a solver is already registered for the given
    /// year-day combination.
    pub fn register<F>(mut self, year: u16, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert((year, day), Box::new(factory));
        Ok(self)
    }

    /// Register all solver plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate.
    ///
    /// Only registers plugins for which the filter returns `true`,
    /// allowing selective registration based on tags, year, or day.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2021)
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

/// Immutable registry for looking up and creating solvers.
///
/// Maps (year, day) pairs to factory functions that parse input and
/// produce solver instances.
pub struct SolverRegistry {
    solvers: HashMap<(u16, u8), SolverFactory>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed input and created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let factory = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        factory(input).map_err(SolverError::ParseError)
    }

    /// Check whether a solver is registered for the given year and day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Iterate over the (year, day) pairs with a registered solver
    pub fn registered(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.solvers.keys().copied()
    }
}

/// Trait for solvers that can register themselves with a registry builder.
///
/// Type-erased counterpart of [`Solver`](crate::Solver): no associated
/// types, so different solver types can sit behind one `&'static dyn`
/// reference in the plugin table. A blanket impl covers every `Solver`.
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
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }
}

/// Plugin information for automatic solver registration.
///
/// Solution crates submit one of these per solver:
///
/// ```ignore
/// puzzle_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2021,
///         day: 3,
///         solver: &Day3,
///         tags: &["2021", "binary-diagnostic"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "2021", "parsing")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
