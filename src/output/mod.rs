//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of reports.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_info, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::report::Report;
use std::io::{self, Write};

/// Format a report into `out` according to the specified format.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, report),
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Csv => write_csv(out, report),
    }
}

/// Format and print a report to stdout.
pub fn print_report(report: &Report, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()
}
