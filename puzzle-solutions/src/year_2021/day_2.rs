//! Day 2: submarine dive commands.
//!
//! Commands are `forward`, `down`, or `up` with a distance. Part 1
//! treats down/up as depth changes; part 2 treats them as aim changes
//! that apply on forward movement. The answer is the product of the
//! final horizontal position and depth.

use anyhow::{anyhow, bail};
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use std::str::FromStr;

pub struct Day2;

puzzle_solver::inventory::submit! {
    SolverPlugin {
        year: 2021,
        day: 2,
        solver: &Day2,
        tags: &["2021", "dive"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub value: i64,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let direction = match parts.next() {
            Some("forward") => Direction::Forward,
            Some("down") => Direction::Down,
            Some("up") => Direction::Up,
            Some(other) => bail!("unknown direction {other:?}"),
            None => bail!("empty command"),
        };
        let value = parts
            .next()
            .ok_or_else(|| anyhow!("missing distance"))?
            .parse::<i64>()?;
        if value < 0 {
            bail!("distance must be non-negative");
        }
        if parts.next().is_some() {
            bail!("trailing data after command");
        }
        Ok(Command { direction, value })
    }
}

impl AocParser for Day2 {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<Command>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day2 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let (horizontal, depth) = match part {
            1 => plot_course(shared),
            2 => plot_course_with_aim(shared),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok((horizontal * depth).to_string())
    }
}

fn plot_course(commands: &[Command]) -> (i64, i64) {
    let mut horizontal = 0;
    let mut depth = 0;
    for command in commands {
        match command.direction {
            Direction::Forward => horizontal += command.value,
            Direction::Down => depth += command.value,
            Direction::Up => depth -= command.value,
        }
    }
    (horizontal, depth)
}

fn plot_course_with_aim(commands: &[Command]) -> (i64, i64) {
    let mut horizontal = 0;
    let mut depth = 0;
    let mut aim = 0;
    for command in commands {
        match command.direction {
            Direction::Forward => {
                horizontal += command.value;
                depth += aim * command.value;
            }
            Direction::Down => aim += command.value,
            Direction::Up => aim -= command.value,
        }
    }
    (horizontal, depth)
}
