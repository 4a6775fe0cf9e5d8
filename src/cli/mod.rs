//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `clearpass solve [INPUT]` - Find the earliest safe delay
//! - `clearpass severity [INPUT]` - Score a trip at a fixed delay
//! - `clearpass bench [INPUT]` - Time repeated solves
//! - `clearpass config` - Show or initialise settings
//!
//! Running without a subcommand solves the default input.

mod bench;
mod settings;
mod severity;
mod solve;

pub use bench::BenchCommand;
pub use settings::ConfigCommand;
pub use severity::SeverityCommand;
pub use solve::SolveCommand;

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::types::Firewall;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// clearpass - slip a probe past a firewall of cycling scanners.
///
/// Reads a firewall description (`depth: range` per line) and finds the
/// smallest delay at which a probe crosses every layer without being caught.
#[derive(Parser, Debug)]
#[command(name = "clearpass")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the earliest delay that passes every scanner", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "CLEARPASS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load settings from `--config` or the default location.
    ///
    /// `config --init` may name a file that does not exist yet.
    pub fn load_settings(&self) -> CliResult<AppSettings> {
        let initialising = matches!(&self.command, Some(Commands::Config(c)) if c.init);
        let settings = match &self.config {
            Some(path) if initialising && !path.exists() => AppSettings::default(),
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Run the selected subcommand, defaulting to `solve`.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let verbose = self.verbose || (settings.verbose && !self.quiet);
        match &self.command {
            Some(Commands::Solve(cmd)) => cmd.execute(settings, verbose, self.quiet),
            Some(Commands::Severity(cmd)) => cmd.execute(settings, verbose, self.quiet),
            Some(Commands::Bench(cmd)) => cmd.execute(settings, verbose, self.quiet),
            Some(Commands::Config(cmd)) => {
                cmd.execute(settings, self.config.as_deref(), verbose, self.quiet)
            }
            None => SolveCommand::default().execute(settings, verbose, self.quiet),
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the smallest delay that passes the firewall
    #[command(alias = "s")]
    Solve(SolveCommand),

    /// Report which scanners catch a probe at a given delay
    #[command(alias = "sev")]
    Severity(SeverityCommand),

    /// Time repeated solves of the same firewall
    #[command(alias = "b")]
    Bench(BenchCommand),

    /// Show or initialise the settings file
    #[command(alias = "c")]
    Config(ConfigCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// The input file to use: the argument if given, else the configured default.
fn resolve_input(arg: Option<&Path>, settings: &AppSettings) -> PathBuf {
    arg.map_or_else(|| settings.default_input.clone(), Path::to_path_buf)
}

/// Read the firewall once, up front.
fn load_firewall(path: &Path) -> CliResult<Firewall> {
    let firewall = Firewall::load(path)?;
    debug!(path = %path.display(), scanners = firewall.len(), "loaded firewall");
    Ok(firewall)
}
