//! aoc2021 - Command-line interface for running Advent of Code 2021 solvers

mod cli;
mod error;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use error::CliError;
use output::{OutputFormatter, PartReport};
use puzzle_solver::{RegistryBuilder, SolverError, SolverRegistry};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry()?;
    let input = std::fs::read_to_string(&args.input)?;

    let mut solver = registry.create_solver(args.year, args.day, &input)?;
    let parts: Vec<u8> = match args.part {
        Some(part) => vec![part],
        None => (1..=solver.parts()).collect(),
    };

    let formatter = OutputFormatter::new(args.quiet);
    let mut parse_reported = false;
    for part in parts {
        let result = solver.solve(part).map_err(SolverError::from)?;
        formatter.print_report(&PartReport {
            year: args.year,
            day: args.day,
            part,
            parse_duration: (!parse_reported).then(|| solver.parse_duration()),
            solve_duration: result.duration(),
            answer: result.answer,
        });
        parse_reported = true;
    }

    Ok(())
}

/// Build registry from all submitted solver plugins
fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}
