//! Command results, ready for formatting.

use crate::solver::{Solution, Strategy, TripReport};
use crate::types::Layer;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Outcome of `clearpass solve`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Input file the firewall came from.
    pub input: String,
    pub strategy: Strategy,
    pub offset: u64,
    pub modulus: u64,
    pub scanners: usize,
    pub moduli: usize,
    pub peak_candidates: usize,
    /// Solve time in microseconds.
    pub elapsed_us: u64,
}

impl SolveReport {
    pub fn new(input: &Path, solution: &Solution, elapsed: Duration) -> Self {
        Self {
            input: input.display().to_string(),
            strategy: solution.strategy,
            offset: solution.offset,
            modulus: solution.modulus,
            scanners: solution.scanners,
            moduli: solution.moduli,
            peak_candidates: solution.peak_candidates,
            elapsed_us: duration_us(elapsed),
        }
    }
}

/// Outcome of `clearpass severity`.
#[derive(Debug, Clone, Serialize)]
pub struct SeverityReport {
    pub input: String,
    pub offset: u64,
    pub severity: u64,
    pub caught: Vec<Layer>,
}

impl SeverityReport {
    pub fn new(input: &Path, trip: TripReport) -> Self {
        Self {
            input: input.display().to_string(),
            offset: trip.offset,
            severity: trip.severity,
            caught: trip.caught,
        }
    }
}

/// Outcome of `clearpass bench`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub input: String,
    pub strategy: Strategy,
    pub runs: u32,
    /// Wall time for all runs, in seconds.
    pub total_secs: f64,
    /// Mean time per run, in microseconds.
    pub mean_us: f64,
    pub offset: u64,
    pub modulus: u64,
}

impl BenchReport {
    pub fn new(input: &Path, solution: &Solution, runs: u32, total: Duration) -> Self {
        let total_secs = total.as_secs_f64();
        let mean_us = if runs == 0 {
            0.0
        } else {
            total_secs * 1_000_000.0 / f64::from(runs)
        };
        Self {
            input: input.display().to_string(),
            strategy: solution.strategy,
            runs,
            total_secs,
            mean_us,
            offset: solution.offset,
            modulus: solution.modulus,
        }
    }
}

/// Any report a command can emit.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Solve(SolveReport),
    Severity(SeverityReport),
    Bench(BenchReport),
}

fn duration_us(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        Solution {
            offset: 10,
            modulus: 12,
            strategy: Strategy::Sieve,
            scanners: 4,
            moduli: 3,
            peak_candidates: 2,
        }
    }

    #[test]
    fn test_bench_mean() {
        let report = BenchReport::new(
            Path::new("input.txt"),
            &solution(),
            1000,
            Duration::from_secs(2),
        );
        assert_eq!(report.total_secs, 2.0);
        assert_eq!(report.mean_us, 2000.0);
    }

    #[test]
    fn test_bench_zero_runs() {
        let report = BenchReport::new(Path::new("x"), &solution(), 0, Duration::ZERO);
        assert_eq!(report.mean_us, 0.0);
    }

    #[test]
    fn test_report_json_is_tagged() {
        let report = Report::Solve(SolveReport::new(
            Path::new("input.txt"),
            &solution(),
            Duration::from_micros(7),
        ));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kind"], "solve");
        assert_eq!(value["offset"], 10);
        assert_eq!(value["strategy"], "sieve");
        assert_eq!(value["elapsed_us"], 7);
    }
}
