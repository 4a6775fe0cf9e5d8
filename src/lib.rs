//! # clearpass - Slip a Probe Past a Firewall of Scanners
//!
//! A firewall is a stack of layers. The layer at depth `d` holds a scanner
//! that sweeps back and forth over `r` cells, so it returns to the top every
//! `2r - 2` picoseconds. A probe enters at depth 0 after some delay and moves
//! one layer per picosecond; it is caught when it reaches a layer while that
//! layer's scanner is at the top.
//!
//! clearpass finds the smallest delay that crosses every layer uncaught,
//! together with the period after which the answer repeats.
//!
//! ## Example Usage
//!
//! ```rust
//! use clearpass::solver::solve;
//! use clearpass::types::Firewall;
//!
//! let firewall: Firewall = "0: 3\n1: 2\n4: 4\n6: 4".parse().unwrap();
//! let solution = solve(&firewall).unwrap();
//!
//! assert_eq!(solution.offset, 10);
//! assert_eq!(solution.modulus, 12);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated depth/range newtypes and the firewall parser
//! - [`solver`] - Constraint construction, the narrowing and brute-force solvers, trip severity
//! - [`config`] - Settings file handling
//! - [`report`] - Command results
//! - [`output`] - Plain, JSON and CSV formatting
//! - [`cli`] - Subcommands
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod solver;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, FirewallError, SolveError};
pub use solver::{solve, OffsetSolver, Solution, Strategy};
pub use types::{Depth, Firewall, Layer, Range};
