//! Solve subcommand implementation.
//!
//! Handles `clearpass solve [INPUT]`.

use super::{load_firewall, resolve_input, OutputFormat};
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::report::{Report, SolveReport};
use crate::solver::{create_solver, is_caught, Strategy};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

/// Find the smallest delay that passes the firewall.
#[derive(Parser, Debug, Default)]
pub struct SolveCommand {
    /// Firewall file with one `depth: range` per line
    ///
    /// Defaults to the `default_input` setting (input.txt).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Solver strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Output format for results
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SolveCommand {
    /// Execute the solve command.
    pub fn execute(&self, settings: &AppSettings, verbose: bool, quiet: bool) -> CliResult<()> {
        let input = resolve_input(self.input.as_deref(), settings);
        let strategy = match self.strategy {
            Some(s) => s,
            None => settings.strategy()?,
        };
        let format = match self.format {
            Some(f) => f,
            None => settings.output_format()?,
        };

        let firewall = load_firewall(&input)?;
        if firewall.is_empty() && !quiet {
            output::print_warning(&format!("{} contains no scanners", input.display()));
        }

        let solver = create_solver(strategy, settings.solver_config());
        let started = Instant::now();
        let solution = solver.solve(&firewall)?;
        let elapsed = started.elapsed();

        if is_caught(&firewall, solution.offset) {
            // Unreachable unless a solver is wrong.
            warn!(offset = solution.offset, "solution is caught by a scanner");
        }

        if verbose {
            output::print_info(&format!(
                "any delay congruent to {} mod {} also passes",
                solution.offset, solution.modulus
            ));
        }

        let report = Report::Solve(SolveReport::new(&input, &solution, elapsed));
        output::print_report(&report, format)?;
        Ok(())
    }
}
