//! Day 1: sonar sweep depth measurements.
//!
//! Part 1 counts how often a depth measurement increases from the
//! previous one; part 2 does the same over sums of a three-measurement
//! sliding window.

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use std::str::FromStr;

pub struct Day1;

puzzle_solver::inventory::submit! {
    SolverPlugin {
        year: 2021,
        day: 1,
        solver: &Day1,
        tags: &["2021", "sonar-sweep"],
    }
}

impl AocParser for Day1 {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                <i64 as FromStr>::from_str(line.trim())
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day1 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let count = match part {
            1 => count_increases(shared),
            2 => count_window_increases(shared),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(count.to_string())
    }
}

fn count_increases(measurements: &[i64]) -> usize {
    measurements
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .count()
}

fn count_window_increases(measurements: &[i64]) -> usize {
    // Consecutive three-measurement windows share two values, so the
    // sums compare the same as the elements four apart.
    measurements
        .windows(4)
        .filter(|quad| quad[3] > quad[0])
        .count()
}
