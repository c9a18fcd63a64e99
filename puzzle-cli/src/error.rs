//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input file failed
    #[error("Input file error: {0}")]
    Io(#[from] std::io::Error),

    /// Solver lookup, parsing, or solving failed
    #[error("Solver error: {0}")]
    Solver(#[from] puzzle_solver::SolverError),

    /// Plugin registration failed
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),
}
