//! Bench subcommand implementation.
//!
//! Handles `clearpass bench [INPUT] -n RUNS`: loads the firewall once and
//! solves it repeatedly, reporting total wall time.

use super::{load_firewall, resolve_input, OutputFormat};
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::report::{BenchReport, Report};
use crate::solver::{create_solver, Strategy};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Time repeated solves of the same firewall.
#[derive(Parser, Debug)]
pub struct BenchCommand {
    /// Firewall file with one `depth: range` per line
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Number of solves to time (defaults to the `default_runs` setting)
    #[arg(short = 'n', long)]
    pub runs: Option<u32>,

    /// Solver strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Output format for results
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl BenchCommand {
    /// Execute the bench command.
    pub fn execute(&self, settings: &AppSettings, verbose: bool, _quiet: bool) -> CliResult<()> {
        let input = resolve_input(self.input.as_deref(), settings);
        let runs = self.runs.unwrap_or(settings.default_runs);
        let strategy = match self.strategy {
            Some(s) => s,
            None => settings.strategy()?,
        };
        let format = match self.format {
            Some(f) => f,
            None => settings.output_format()?,
        };

        if runs == 0 {
            return Err(CliError::Other("run count must be at least 1".to_string()));
        }

        let firewall = load_firewall(&input)?;
        let solver = create_solver(strategy, settings.solver_config());

        // Fail fast on unsolvable input instead of timing errors.
        let solution = solver.solve(&firewall)?;

        let progress = if verbose {
            let pb = ProgressBar::new(u64::from(runs));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                    .map_err(|e| CliError::Other(e.to_string()))?
                    .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let started = Instant::now();
        for _ in 0..runs {
            black_box(solver.solve(black_box(&firewall))?);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }
        let total = started.elapsed();

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        info!(runs, strategy = %strategy, secs = total.as_secs_f64(), "bench finished");

        let report = Report::Bench(BenchReport::new(&input, &solution, runs, total));
        output::print_report(&report, format)?;
        Ok(())
    }
}
