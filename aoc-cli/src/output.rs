//! Printing results and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    started: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), _) => eprintln!(
                "{}/{:02} Part {}: Error - {e}",
                result.year, result.day, result.part
            ),
        }
    }

    /// Counts and timings over all printed results; silent in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        let failed = results.len() - solved;

        let parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();
        let wall_time = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!("Parts: {solved} solved, {failed} failed");
        println!("Total parse time: {}", format_duration(parse_time));
        println!("Total solve time: {}", format_duration(solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(wall_time));

        if let (Some(compute), Some(wall)) = (
            (parse_time + solve_time).num_microseconds(),
            wall_time.num_microseconds().filter(|&us| us > 0),
        ) {
            println!("Speedup factor: {:.2}x", compute as f64 / wall as f64);
        }
    }
}

fn format_result(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();

    format!(
        "{}/{:02} Part {}: {answer} ({parse}solve: {})",
        result.year,
        result.day,
        result.part,
        format_duration(result.solve_duration)
    )
}

/// Microseconds below 1ms, milliseconds below 1s, seconds otherwise
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    match micros {
        m if m < 0 => format!("-{}", format_duration(-d)),
        m if m < 1_000 => format!("{m}µs"),
        m if m < 1_000_000 => format!("{:.2}ms", m as f64 / 1e3),
        m => format!("{:.2}s", m as f64 / 1e6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_format_result() {
        let result = SolverResult {
            year: 2023,
            day: 6,
            part: 2,
            answer: Ok("71503".to_string()),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(340),
        };
        assert_eq!(
            format_result(&result),
            "2023/06 Part 2: 71503 (parse: 12µs, solve: 340µs)"
        );
    }
}
