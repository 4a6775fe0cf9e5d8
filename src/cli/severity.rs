//! Severity subcommand implementation.
//!
//! Handles `clearpass severity [INPUT] --offset N`.

use super::{load_firewall, resolve_input, OutputFormat};
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::report::{Report, SeverityReport};
use crate::solver::TripReport;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Report which scanners catch a probe at a given delay.
#[derive(Parser, Debug)]
pub struct SeverityCommand {
    /// Firewall file with one `depth: range` per line
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Delay before the probe enters the firewall
    #[arg(short = 'o', long, default_value = "0")]
    pub offset: u64,

    /// Output format for results
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SeverityCommand {
    /// Execute the severity command.
    pub fn execute(&self, settings: &AppSettings, _verbose: bool, _quiet: bool) -> CliResult<()> {
        let input = resolve_input(self.input.as_deref(), settings);
        let format = match self.format {
            Some(f) => f,
            None => settings.output_format()?,
        };

        let firewall = load_firewall(&input)?;
        let trip = TripReport::new(&firewall, self.offset);
        info!(
            offset = trip.offset,
            severity = trip.severity,
            caught = trip.caught.len(),
            "trip scored"
        );

        let report = Report::Severity(SeverityReport::new(&input, trip));
        output::print_report(&report, format)?;
        Ok(())
    }
}
