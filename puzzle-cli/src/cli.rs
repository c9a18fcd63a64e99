//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2021 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2021", about = "Run Advent of Code 2021 solvers", version)]
pub struct Args {
    /// Year of the puzzle
    #[arg(short, long, default_value_t = 2021)]
    pub year: u16,

    /// Day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Path to the puzzle input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
