//! Day 3: binary diagnostic.
//!
//! The loader side of the diagnostic report: lines of ASCII binary
//! digits become fixed-width readings, with the width taken from the
//! first line rather than hard-coded. Part 1 multiplies gamma by
//! epsilon; part 2 multiplies the oxygen generator rating by the CO2
//! scrubber rating. The computations themselves live in
//! [`crate::diagnostic`].

use crate::diagnostic::{
    self, Diagnostic, DiagnosticError,
};
use anyhow::{anyhow, bail};
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};

pub struct Day3;

puzzle_solver::inventory::submit! {
    SolverPlugin {
        year: 2021,
        day: 3,
        solver: &Day3,
        tags: &["2021", "binary-diagnostic"],
    }
}

/// Parsed diagnostic report: the readings plus their shared bit width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub readings: Vec<Diagnostic>,
    pub width: u32,
}

impl AocParser for Day3 {
    type SharedData<'a> = DiagnosticReport;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut readings = Vec::new();
        let mut width = 0u32;
        for (line_idx, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            let reading = parse_reading(line, line_idx + 1, &mut width)
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            readings.push(reading);
        }
        if readings.is_empty() {
            return Err(ParseError::MissingData("no diagnostics in input".to_string()));
        }
        Ok(DiagnosticReport { readings, width })
    }
}

impl Solver for Day3 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let product = match part {
            1 => {
                let (gamma, epsilon) = diagnostic::compute_report(&shared.readings, shared.width)
                    .map_err(solve_failed)?;
                u64::from(gamma) * u64::from(epsilon)
            }
            2 => {
                let oxygen = diagnostic::oxygen_generator_rating(&shared.readings, shared.width)
                    .map_err(solve_failed)?;
                let co2 = diagnostic::co2_scrubber_rating(&shared.readings, shared.width)
                    .map_err(solve_failed)?;
                u64::from(oxygen) * u64::from(co2)
            }
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(product.to_string())
    }
}

fn solve_failed(e: DiagnosticError) -> SolveError {
    SolveError::SolveFailed(Box::new(e))
}

/// Parse one line of `0`/`1` digits, fixing the width from the first line
fn parse_reading(line: &str, line_no: usize, width: &mut u32) -> anyhow::Result<Diagnostic> {
    let bits = line.len() as u32;
    if *width == 0 {
        if bits == 0 || bits > Diagnostic::BITS {
            bail!("(line {line_no}) diagnostics must be 1 to 32 bits wide, got {bits}");
        }
        *width = bits;
    } else if bits != *width {
        bail!("(line {line_no}) expected {width} bits, got {bits}");
    }
    line.bytes().try_fold(0, |value, byte| match byte {
        b'0' => Ok(value << 1),
        b'1' => Ok(value << 1 | 1),
        other => Err(anyhow!(
            "(line {line_no}) invalid binary digit {:?}",
            char::from(other)
        )),
    })
}
