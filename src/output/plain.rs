//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::report::{BenchReport, Report, SeverityReport, SolveReport};
use console::style;
use std::io::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Write a report in human-readable plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    match report {
        Report::Solve(r) => write_solve(out, r),
        Report::Severity(r) => write_severity(out, r),
        Report::Bench(r) => write_bench(out, r),
    }
}

fn write_header<W: Write>(out: &mut W, title: &str, input: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(
        out,
        "                    {} {}",
        style("clearpass").cyan().bold(),
        title
    )?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)?;
    writeln!(out, "  {} {}", style("Input:").bold(), input)
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(RULE).cyan())?;
    writeln!(out)
}

fn write_solve<W: Write>(out: &mut W, r: &SolveReport) -> io::Result<()> {
    write_header(out, "Solution", &r.input)?;
    writeln!(out, "  {} {}", style("Strategy:").bold(), r.strategy)?;
    writeln!(
        out,
        "  {} {} scanners, {} distinct cycle lengths",
        style("Firewall:").bold(),
        r.scanners,
        r.moduli
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  {} {} (mod {})",
        style("Delay:").bold(),
        style(r.offset).green().bold(),
        r.modulus
    )?;
    writeln!(
        out,
        "  {} peak {} candidates, {:.3}ms",
        style("Search:").bold(),
        r.peak_candidates,
        r.elapsed_us as f64 / 1000.0
    )?;
    write_footer(out)
}

fn write_severity<W: Write>(out: &mut W, r: &SeverityReport) -> io::Result<()> {
    write_header(out, "Trip Severity", &r.input)?;
    writeln!(out, "  {} {}", style("Delay:").bold(), r.offset)?;
    writeln!(out)?;

    if r.caught.is_empty() {
        writeln!(out, "  {}", style("Passed without being caught.").green())?;
        return write_footer(out);
    }

    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(
        out,
        "  {:>8}  {:>8}  {:>12}",
        style("DEPTH").bold(),
        style("RANGE").bold(),
        style("SEVERITY").bold()
    )?;
    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    for layer in &r.caught {
        writeln!(
            out,
            "  {:>8}  {:>8}  {:>12}",
            layer.depth,
            layer.range,
            style(layer.severity()).red()
        )?;
    }
    writeln!(out, "  {}", style(THIN_RULE).dim())?;
    writeln!(
        out,
        "  {} {} ({} caught)",
        style("Severity:").bold(),
        style(r.severity).red().bold(),
        r.caught.len()
    )?;
    write_footer(out)
}

fn write_bench<W: Write>(out: &mut W, r: &BenchReport) -> io::Result<()> {
    writeln!(
        out,
        "{} runs in {:.3}s ({} strategy, {:.1}µs/run, delay {} mod {})",
        r.runs,
        r.total_secs,
        style(r.strategy).yellow(),
        r.mean_us,
        r.offset,
        r.modulus
    )
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solution, Strategy, TripReport};
    use crate::types::Firewall;
    use std::path::Path;
    use std::time::Duration;

    fn render(report: &Report) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        write_plain(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_solve_plain() {
        let solution = Solution {
            offset: 10,
            modulus: 12,
            strategy: Strategy::Sieve,
            scanners: 4,
            moduli: 3,
            peak_candidates: 2,
        };
        let text = render(&Report::Solve(SolveReport::new(
            Path::new("input.txt"),
            &solution,
            Duration::from_micros(1500),
        )));
        assert!(text.contains("Delay: 10 (mod 12)"));
        assert!(text.contains("4 scanners, 3 distinct cycle lengths"));
        assert!(text.contains("1.500ms"));
    }

    #[test]
    fn test_severity_plain_clean_pass() {
        let firewall: Firewall = "0: 3\n1: 2\n4: 4\n6: 4".parse().unwrap();
        let text = render(&Report::Severity(SeverityReport::new(
            Path::new("input.txt"),
            TripReport::new(&firewall, 10),
        )));
        assert!(text.contains("Passed without being caught."));
    }

    #[test]
    fn test_bench_plain() {
        let solution = Solution {
            offset: 10,
            modulus: 12,
            strategy: Strategy::Brute,
            scanners: 4,
            moduli: 3,
            peak_candidates: 11,
        };
        let text = render(&Report::Bench(BenchReport::new(
            Path::new("input.txt"),
            &solution,
            1000,
            Duration::from_millis(250),
        )));
        assert!(text.starts_with("1000 runs in 0.250s"));
        assert!(text.contains("brute strategy"));
    }
}
