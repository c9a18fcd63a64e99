//! Puzzle Solver Library
//!
//! A type-safe framework for registering and running daily puzzle
//! solvers. Each solver pairs custom input parsing with answers for
//! one or more parts, and registers itself with a year-day registry.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`Solver`])
//! - Type-erased solver instances with parse/solve timing ([`DynSolver`])
//! - A registry keyed by (year, day) with duplicate detection
//! - A plugin system so solution crates self-register via `inventory`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register(2021, 1, |input: &str| {
//!         Ok(Box::new(puzzle_solver::SolverInstance::<MyDay1>::new(2021, 1, input)?))
//!     })
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugin Registration
//!
//! Solution crates submit a [`SolverPlugin`] per solver with
//! `inventory::submit!` (re-exported here), and binaries collect them
//! all with [`RegistryBuilder::register_all_plugins`] or filter with
//! [`RegistryBuilder::register_solver_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory so solution crates can submit plugins without a
// direct dependency
pub use inventory;
