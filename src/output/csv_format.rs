//! CSV output formatting.

use crate::report::Report;
use std::io::{self, Write};

/// Write a report in CSV format.
///
/// Severity reports produce one row per catching scanner; the others are a
/// single row.
pub fn write_csv<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    match report {
        Report::Solve(r) => {
            wtr.write_record([
                "input",
                "strategy",
                "offset",
                "modulus",
                "scanners",
                "moduli",
                "peak_candidates",
                "elapsed_us",
            ])?;
            wtr.write_record([
                r.input.clone(),
                r.strategy.to_string(),
                r.offset.to_string(),
                r.modulus.to_string(),
                r.scanners.to_string(),
                r.moduli.to_string(),
                r.peak_candidates.to_string(),
                r.elapsed_us.to_string(),
            ])?;
        }
        Report::Severity(r) => {
            wtr.write_record(["offset", "depth", "range", "severity"])?;
            for layer in &r.caught {
                wtr.write_record([
                    r.offset.to_string(),
                    layer.depth.to_string(),
                    layer.range.to_string(),
                    layer.severity().to_string(),
                ])?;
            }
        }
        Report::Bench(r) => {
            wtr.write_record([
                "input", "strategy", "runs", "total_secs", "mean_us", "offset", "modulus",
            ])?;
            wtr.write_record([
                r.input.clone(),
                r.strategy.to_string(),
                r.runs.to_string(),
                format!("{:.6}", r.total_secs),
                format!("{:.3}", r.mean_us),
                r.offset.to_string(),
                r.modulus.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
