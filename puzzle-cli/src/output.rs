//! Output formatting for solver results

use chrono::TimeDelta;

/// One solved part, ready for display
#[derive(Debug, Clone)]
pub struct PartReport {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Parse timing, attached to the first part of a run only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a single result
    pub fn print_report(&self, report: &PartReport) {
        println!("{}", self.format_report(report));
    }

    fn format_report(&self, report: &PartReport) -> String {
        if self.quiet {
            return report.answer.clone();
        }

        let prefix = format!("{}/{:02} Part {}", report.year, report.day, report.part);
        let parse_timing = report
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        let solve_timing = format_duration(report.solve_duration);
        format!(
            "{}: {} ({}solve: {})",
            prefix, report.answer, parse_timing, solve_timing
        )
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
