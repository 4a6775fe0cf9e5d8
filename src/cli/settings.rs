//! Config subcommand implementation.
//!
//! Handles `clearpass config`: prints the effective settings, the settings
//! file location, or writes a default settings file.

use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::path::Path;

/// Show or initialise the settings file.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Print the settings file path only
    #[arg(long, conflicts_with = "init")]
    pub path: bool,

    /// Write the default settings to the settings file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing settings file with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        custom: Option<&Path>,
        _verbose: bool,
        quiet: bool,
    ) -> CliResult<()> {
        let file = match custom {
            Some(path) => path.to_path_buf(),
            None => Paths::discover()?.settings_file(),
        };

        if self.path {
            println!("{}", file.display());
            return Ok(());
        }

        if self.init {
            return self.init_file(&file, quiet);
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| CliError::Other(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }

    fn init_file(&self, file: &Path, quiet: bool) -> CliResult<()> {
        if file.exists() && !self.force {
            return Err(CliError::Other(format!(
                "{} already exists (use --force to overwrite)",
                file.display()
            )));
        }

        AppSettings::default().save_to(file)?;
        if !quiet {
            output::print_info(&format!("wrote default settings to {}", file.display()));
        }
        Ok(())
    }
}
