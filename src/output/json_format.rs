//! JSON output formatting.

use crate::report::Report;
use std::io::{self, Write};

/// Write a report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(io::Error::other)?;
    writeln!(out)
}
