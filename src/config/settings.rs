//! Application settings and paths.
//!
//! Settings live in an XDG-compliant location and are optional: a missing
//! file means defaults.

use crate::cli::OutputFormat;
use crate::error::{ConfigError, ConfigResult};
use crate::solver::{SolverConfig, Strategy};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/clearpass)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the configuration directory without creating it.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "clearpass", "clearpass")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Firewall file used when no input path is given.
    pub default_input: PathBuf,
    /// Repetitions for the `bench` command.
    pub default_runs: u32,
    /// Solver strategy (sieve, brute).
    pub default_strategy: String,
    /// Output format (plain, json, csv).
    pub default_output_format: String,
    /// Cap on the candidate set before a solve gives up.
    pub max_candidates: usize,
    /// Enable verbose output by default.
    pub verbose: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from("input.txt"),
            default_runs: 1000,
            default_strategy: "sieve".to_string(),
            default_output_format: "plain".to_string(),
            max_candidates: SolverConfig::DEFAULT_MAX_CANDIDATES,
            verbose: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::discover()?.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check that the string-typed fields name known values.
    pub fn validate(&self) -> ConfigResult<()> {
        self.strategy()?;
        self.output_format()?;
        if self.max_candidates == 0 {
            return Err(ConfigError::InvalidFormat(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn strategy(&self) -> ConfigResult<Strategy> {
        self.default_strategy
            .parse()
            .map_err(ConfigError::InvalidFormat)
    }

    pub fn output_format(&self) -> ConfigResult<OutputFormat> {
        self.default_output_format
            .parse()
            .map_err(ConfigError::InvalidFormat)
    }

    /// Solver limits derived from these settings.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new().with_max_candidates(self.max_candidates)
    }
}
