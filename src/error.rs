//! Error types for clearpass.
//!
//! Uses `thiserror` for ergonomic error definitions. Each layer owns an
//! enum; [`CliError`] folds them together for the command handlers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a firewall description.
#[derive(Error, Debug)]
pub enum FirewallError {
    #[error("line {line}: expected `depth: range`, found {content:?}")]
    MissingColon { line: usize, content: String },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: scanner at depth {depth} has range 0")]
    ZeroRange { line: usize, depth: u64 },

    #[error("line {line}: scanner at depth {depth} has range {range}, above the maximum of {max}")]
    RangeTooLarge {
        line: usize,
        depth: u64,
        range: u64,
        max: u64,
    },

    #[error("line {line}: depth {depth} is already defined")]
    DuplicateDepth { line: usize, depth: u64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the offset solvers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("scanner at depth {depth} has range 1 and catches every probe")]
    AlwaysCaught { depth: u64 },

    #[error("no offset passes the firewall (last candidate removed by modulus {modulus})")]
    Unsatisfiable { modulus: u64 },

    #[error("lcm of {lcm} and {modulus} does not fit in 64 bits")]
    ModulusOverflow { lcm: u64, modulus: u64 },

    #[error("candidate set exceeded {limit} entries while folding modulus {modulus}")]
    CandidateLimitExceeded { limit: usize, modulus: u64 },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Errors surfaced by CLI command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Firewall(#[from] FirewallError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for parsing.
pub type FirewallResult<T> = Result<T, FirewallError>;

/// Result type alias for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;
